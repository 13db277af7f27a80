//! Views window plumbing and the raw platform window fallback.

use std::mem;
use std::os::raw::c_int;
use std::ptr;

use log::error;
use parking_lot::Mutex;

use crate::bindings::capi::{
    cef_browser_settings_t, cef_browser_view_delegate_t, cef_browser_view_t, cef_client_t,
    cef_runtime_style_t, cef_show_state_t, cef_size_t, cef_view_delegate_t, cef_view_t,
    cef_window_delegate_t, cef_window_info_t, cef_window_t,
};
use crate::cef::refcount::{self, HostRef};
use crate::cef::strings::CefString;
use crate::cef::views::{self, BrowserView, Window};
use crate::constants::{NATIVE_WINDOW_NAME, PREFERRED_WINDOW_HEIGHT, PREFERRED_WINDOW_WIDTH};
use crate::dynamic_cef_library_loader as loader;
use crate::startup::{LaunchConfig, RuntimeStyle, ShowState};

/// State behind a window delegate: the hosted view plus the launch answers
/// the engine queries for.
struct WindowDelegateState {
    browser_view: Mutex<Option<BrowserView>>,
    runtime_style: RuntimeStyle,
    show_state: ShowState,
}

struct BrowserViewDelegateState {
    runtime_style: RuntimeStyle,
}

/// Creates the Views-managed browser window for `config`.
pub fn create_views_window(
    client: HostRef<cef_client_t>,
    config: &LaunchConfig,
    settings: &cef_browser_settings_t,
) {
    let delegate = make_browser_view_delegate(config.runtime_style);
    let Some(view) = views::create_browser_view(client, &config.url, settings, delegate) else {
        error!("[Window] browser view creation failed");
        return;
    };
    // The window attaches the view and shows itself from the created hook.
    let delegate = make_window_delegate(view, config.runtime_style, config.show_state);
    if views::create_top_level_window(delegate).is_none() {
        error!("[Window] top-level window creation failed");
    }
}

/// Creates the first browser in a raw platform window.
pub fn create_native_window(
    client: HostRef<cef_client_t>,
    config: &LaunchConfig,
    settings: &cef_browser_settings_t,
) {
    let engine = loader::get();
    let window_info = NativeWindowInfo::popup(config.runtime_style);
    let url = CefString::new(&config.url);
    let created = unsafe {
        (engine.cef_browser_host_create_browser)(
            window_info.as_ptr(),
            client.into_raw(),
            url.as_ptr(),
            settings,
            ptr::null_mut(),
            ptr::null_mut(),
        )
    };
    if created == 0 {
        error!("[Window] native browser creation failed");
    }
}

fn make_window_delegate(
    browser_view: BrowserView,
    runtime_style: RuntimeStyle,
    show_state: ShowState,
) -> HostRef<cef_window_delegate_t> {
    let mut table: cef_window_delegate_t = unsafe { mem::zeroed() };
    table.on_window_created = Some(on_window_created);
    table.on_window_destroyed = Some(on_window_destroyed);
    table.can_close = Some(can_close);
    table.get_initial_show_state = Some(get_initial_show_state);
    table.get_window_runtime_style = Some(get_window_runtime_style);
    table.base.base.get_preferred_size = Some(get_preferred_size);
    refcount::allocate(
        table,
        WindowDelegateState {
            browser_view: Mutex::new(Some(browser_view)),
            runtime_style,
            show_state,
        },
    )
}

fn make_browser_view_delegate(runtime_style: RuntimeStyle) -> HostRef<cef_browser_view_delegate_t> {
    let mut table: cef_browser_view_delegate_t = unsafe { mem::zeroed() };
    table.on_popup_browser_view_created = Some(on_popup_browser_view_created);
    table.get_browser_runtime_style = Some(get_browser_runtime_style);
    refcount::allocate(table, BrowserViewDelegateState { runtime_style })
}

unsafe extern "system" fn on_window_created(
    self_: *mut cef_window_delegate_t,
    window: *mut cef_window_t,
) {
    let state = unsafe { refcount::shared_state::<cef_window_delegate_t, WindowDelegateState>(self_) };
    let Some(window) = (unsafe { Window::from_borrowed(window) }) else {
        return;
    };
    let Some(view) = state.browser_view.lock().clone() else {
        return;
    };
    window.add_child_view(&view);
    if state.show_state.shows_window() {
        window.show();
    }
}

unsafe extern "system" fn on_window_destroyed(
    self_: *mut cef_window_delegate_t,
    _window: *mut cef_window_t,
) {
    let state = unsafe { refcount::shared_state::<cef_window_delegate_t, WindowDelegateState>(self_) };
    // Drop the view reference so the browser can go away with the window.
    state.browser_view.lock().take();
}

unsafe extern "system" fn can_close(
    self_: *mut cef_window_delegate_t,
    _window: *mut cef_window_t,
) -> c_int {
    let state = unsafe { refcount::shared_state::<cef_window_delegate_t, WindowDelegateState>(self_) };
    // Ask the browser; it says no until unload handlers have run.
    let browser = state.browser_view.lock().as_ref().and_then(BrowserView::browser);
    match browser {
        Some(browser) => browser.host().try_close_browser() as c_int,
        None => 1,
    }
}

unsafe extern "system" fn get_preferred_size(
    _self: *mut cef_view_delegate_t,
    _view: *mut cef_view_t,
) -> cef_size_t {
    cef_size_t {
        width: PREFERRED_WINDOW_WIDTH,
        height: PREFERRED_WINDOW_HEIGHT,
    }
}

unsafe extern "system" fn get_initial_show_state(
    self_: *mut cef_window_delegate_t,
    _window: *mut cef_window_t,
) -> cef_show_state_t {
    unsafe { refcount::shared_state::<cef_window_delegate_t, WindowDelegateState>(self_) }
        .show_state
        .to_raw()
}

unsafe extern "system" fn get_window_runtime_style(
    self_: *mut cef_window_delegate_t,
) -> cef_runtime_style_t {
    unsafe { refcount::shared_state::<cef_window_delegate_t, WindowDelegateState>(self_) }
        .runtime_style
        .to_raw()
}

unsafe extern "system" fn on_popup_browser_view_created(
    self_: *mut cef_browser_view_delegate_t,
    _browser_view: *mut cef_browser_view_t,
    popup_browser_view: *mut cef_browser_view_t,
    _is_devtools: c_int,
) -> c_int {
    let state = unsafe {
        refcount::shared_state::<cef_browser_view_delegate_t, BrowserViewDelegateState>(self_)
    };
    let Some(popup) = (unsafe { BrowserView::from_borrowed(popup_browser_view) }) else {
        return 0;
    };
    // Host the popup in its own top-level window; it shows itself from the
    // created hook like the first window does.
    let delegate = make_window_delegate(popup, state.runtime_style, ShowState::Normal);
    if views::create_top_level_window(delegate).is_none() {
        error!("[Window] popup window creation failed");
        return 0;
    }
    1
}

unsafe extern "system" fn get_browser_runtime_style(
    self_: *mut cef_browser_view_delegate_t,
) -> cef_runtime_style_t {
    unsafe {
        refcount::shared_state::<cef_browser_view_delegate_t, BrowserViewDelegateState>(self_)
    }
    .runtime_style
    .to_raw()
}

/// Native window parameters plus the owned title buffer the inline string
/// field points into.
pub struct NativeWindowInfo {
    info: cef_window_info_t,
    _window_name: CefString,
}

impl NativeWindowInfo {
    /// Top-level popup window defaults, matching the engine's `SetAsPopup`
    /// helper.
    #[cfg(windows)]
    pub fn popup(runtime_style: RuntimeStyle) -> NativeWindowInfo {
        use windows::Win32::UI::WindowsAndMessaging::{
            CW_USEDEFAULT, WS_CLIPCHILDREN, WS_CLIPSIBLINGS, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
        };

        use crate::bindings::capi::cef_rect_t;

        let window_name = CefString::new(NATIVE_WINDOW_NAME);
        let mut info: cef_window_info_t = unsafe { mem::zeroed() };
        info.style = (WS_OVERLAPPEDWINDOW | WS_CLIPCHILDREN | WS_CLIPSIBLINGS | WS_VISIBLE).0;
        info.bounds = cef_rect_t {
            x: CW_USEDEFAULT,
            y: CW_USEDEFAULT,
            width: CW_USEDEFAULT,
            height: CW_USEDEFAULT,
        };
        info.window_name = window_name.as_value();
        info.runtime_style = runtime_style.to_raw();
        NativeWindowInfo {
            info,
            _window_name: window_name,
        }
    }

    #[cfg(target_os = "linux")]
    pub fn popup(runtime_style: RuntimeStyle) -> NativeWindowInfo {
        let window_name = CefString::new(NATIVE_WINDOW_NAME);
        let mut info: cef_window_info_t = unsafe { mem::zeroed() };
        info.window_name = window_name.as_value();
        info.runtime_style = runtime_style.to_raw();
        NativeWindowInfo {
            info,
            _window_name: window_name,
        }
    }

    pub fn as_ptr(&self) -> *const cef_window_info_t {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::capi::CEF_RUNTIME_STYLE_ALLOY;

    #[test]
    fn popup_window_info_keeps_the_title_buffer_alive() {
        let info = NativeWindowInfo::popup(RuntimeStyle::Alloy);
        let raw = unsafe { &*info.as_ptr() };
        assert_eq!(
            raw.window_name.length,
            NATIVE_WINDOW_NAME.encode_utf16().count()
        );
        assert!(!raw.window_name.str_.is_null());
        assert!(raw.window_name.dtor.is_none());
        assert_eq!(raw.runtime_style, CEF_RUNTIME_STYLE_ALLOY);
    }

    #[cfg(windows)]
    #[test]
    fn popup_window_info_uses_default_placement() {
        use windows::Win32::UI::WindowsAndMessaging::CW_USEDEFAULT;

        let info = NativeWindowInfo::popup(RuntimeStyle::Default);
        let raw = unsafe { &*info.as_ptr() };
        assert_eq!(raw.bounds.x, CW_USEDEFAULT);
        assert_eq!(raw.bounds.width, CW_USEDEFAULT);
        assert_ne!(raw.style, 0);
    }
}
