//! The browser client: life-span bookkeeping, close choreography, title
//! updates, and the load-error page.

use std::mem;
use std::os::raw::c_int;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "linux")]
use log::debug;
use log::{info, warn};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::bindings::capi::{
    ERR_ABORTED, cef_browser_t, cef_client_t, cef_display_handler_t, cef_errorcode_t,
    cef_frame_t, cef_life_span_handler_t, cef_load_handler_t, cef_string_t,
};
use crate::cef::browser::{Browser, Frame};
use crate::cef::refcount::{self, HostRef};
use crate::cef::strings;
use crate::cef::task;
use crate::cef::views::BrowserView;
use crate::startup::RuntimeStyle;

/// Shared state behind every client object handed to the engine.
pub struct ClientState {
    runtime_style: RuntimeStyle,
    browsers: Mutex<Vec<Browser>>,
    is_closing: AtomicBool,
}

impl ClientState {
    fn new(runtime_style: RuntimeStyle) -> ClientState {
        ClientState {
            runtime_style,
            browsers: Mutex::new(Vec::new()),
            is_closing: AtomicBool::new(false),
        }
    }

    /// True once the last browser has begun closing.
    pub fn is_closing(&self) -> bool {
        self.is_closing.load(Ordering::SeqCst)
    }
}

static CLIENT_STATE: OnceCell<Arc<ClientState>> = OnceCell::new();

/// Publishes the process-wide client state. Later calls return the state
/// installed first.
pub fn install(runtime_style: RuntimeStyle) -> Arc<ClientState> {
    Arc::clone(CLIENT_STATE.get_or_init(|| Arc::new(ClientState::new(runtime_style))))
}

/// The installed client state, `None` before the first window was set up.
pub fn instance() -> Option<Arc<ClientState>> {
    CLIENT_STATE.get().cloned()
}

struct ClientCallbacks {
    state: Arc<ClientState>,
    life_span: HostRef<cef_life_span_handler_t>,
    display: HostRef<cef_display_handler_t>,
    load: HostRef<cef_load_handler_t>,
}

/// Builds a client object over the shared state. Every client the shell
/// hands out reports the same handler suite.
pub fn make_client(state: Arc<ClientState>) -> HostRef<cef_client_t> {
    let mut life_span: cef_life_span_handler_t = unsafe { mem::zeroed() };
    life_span.on_after_created = Some(on_after_created);
    life_span.do_close = Some(do_close);
    life_span.on_before_close = Some(on_before_close);
    let life_span = refcount::allocate(life_span, Arc::clone(&state));

    let mut display: cef_display_handler_t = unsafe { mem::zeroed() };
    display.on_title_change = Some(on_title_change);
    let display = refcount::allocate(display, Arc::clone(&state));

    let mut load: cef_load_handler_t = unsafe { mem::zeroed() };
    load.on_load_error = Some(on_load_error);
    let load = refcount::allocate(load, Arc::clone(&state));

    let mut client: cef_client_t = unsafe { mem::zeroed() };
    client.get_life_span_handler = Some(get_life_span_handler);
    client.get_display_handler = Some(get_display_handler);
    client.get_load_handler = Some(get_load_handler);
    refcount::allocate(
        client,
        ClientCallbacks {
            state,
            life_span,
            display,
            load,
        },
    )
}

/// Closes every open browser. Callable from any thread; off the UI thread
/// it reposts itself through the engine's task queue.
pub fn close_all_browsers(state: &Arc<ClientState>, force_close: bool) {
    if !task::currently_on_ui_thread() {
        let state = Arc::clone(state);
        task::post_to_ui(move || close_all_browsers(&state, force_close));
        return;
    }

    let browsers: Vec<Browser> = state.browsers.lock().clone();
    if browsers.is_empty() {
        return;
    }
    info!("[Client] closing {} open browser(s)", browsers.len());
    for browser in &browsers {
        browser.host().close_browser(force_close);
    }
}

unsafe extern "system" fn get_life_span_handler(
    self_: *mut cef_client_t,
) -> *mut cef_life_span_handler_t {
    unsafe { refcount::shared_state::<cef_client_t, ClientCallbacks>(self_) }
        .life_span
        .retained_raw()
}

unsafe extern "system" fn get_display_handler(
    self_: *mut cef_client_t,
) -> *mut cef_display_handler_t {
    unsafe { refcount::shared_state::<cef_client_t, ClientCallbacks>(self_) }
        .display
        .retained_raw()
}

unsafe extern "system" fn get_load_handler(self_: *mut cef_client_t) -> *mut cef_load_handler_t {
    unsafe { refcount::shared_state::<cef_client_t, ClientCallbacks>(self_) }
        .load
        .retained_raw()
}

unsafe extern "system" fn on_after_created(
    self_: *mut cef_life_span_handler_t,
    browser: *mut cef_browser_t,
) {
    debug_assert!(task::currently_on_ui_thread());
    let state =
        unsafe { refcount::shared_state::<cef_life_span_handler_t, Arc<ClientState>>(self_) };
    let Some(browser) = (unsafe { Browser::from_borrowed(browser) }) else {
        return;
    };
    info!("[Client] browser {} created", browser.identifier());
    state.browsers.lock().push(browser);
}

unsafe extern "system" fn do_close(
    self_: *mut cef_life_span_handler_t,
    _browser: *mut cef_browser_t,
) -> c_int {
    debug_assert!(task::currently_on_ui_thread());
    let state =
        unsafe { refcount::shared_state::<cef_life_span_handler_t, Arc<ClientState>>(self_) };
    if state.browsers.lock().len() == 1 {
        // Last window: flag teardown before the close proceeds so the title
        // and close observers can tell it apart from normal navigation.
        state.is_closing.store(true, Ordering::SeqCst);
    }
    // Allow the close to continue into on_before_close.
    0
}

unsafe extern "system" fn on_before_close(
    self_: *mut cef_life_span_handler_t,
    browser: *mut cef_browser_t,
) {
    debug_assert!(task::currently_on_ui_thread());
    let state =
        unsafe { refcount::shared_state::<cef_life_span_handler_t, Arc<ClientState>>(self_) };
    let Some(browser) = (unsafe { Browser::from_borrowed(browser) }) else {
        return;
    };
    let mut browsers = state.browsers.lock();
    if let Some(index) = browsers.iter().position(|open| open.is_same(&browser)) {
        browsers.remove(index);
    }
    let none_left = browsers.is_empty();
    drop(browsers);

    if none_left {
        info!("[Client] last browser closed; quitting the message loop");
        task::quit_message_loop();
    }
}

unsafe extern "system" fn on_title_change(
    self_: *mut cef_display_handler_t,
    browser: *mut cef_browser_t,
    title: *const cef_string_t,
) {
    debug_assert!(task::currently_on_ui_thread());
    let state =
        unsafe { refcount::shared_state::<cef_display_handler_t, Arc<ClientState>>(self_) };
    if state.is_closing() {
        // The final about:blank transition races window teardown.
        return;
    }
    let Some(browser) = (unsafe { Browser::from_borrowed(browser) }) else {
        return;
    };
    let title = unsafe { strings::read(title) }.unwrap_or_default();
    if let Some(window) = BrowserView::for_browser(&browser).and_then(|view| view.window()) {
        window.set_title(&title);
    } else if state.runtime_style == RuntimeStyle::Alloy {
        // Chrome style manages native frame titles itself.
        platform_title_change(&browser, &title);
    }
}

unsafe extern "system" fn on_load_error(
    self_: *mut cef_load_handler_t,
    _browser: *mut cef_browser_t,
    frame: *mut cef_frame_t,
    error_code: cef_errorcode_t,
    error_text: *const cef_string_t,
    failed_url: *const cef_string_t,
) {
    debug_assert!(task::currently_on_ui_thread());
    let state = unsafe { refcount::shared_state::<cef_load_handler_t, Arc<ClientState>>(self_) };
    // Allow Chrome style to show its own error page.
    if state.runtime_style != RuntimeStyle::Alloy {
        return;
    }
    // Don't display an error for downloaded files or aborted navigations.
    if error_code == ERR_ABORTED {
        return;
    }
    let Some(frame) = (unsafe { Frame::from_borrowed(frame) }) else {
        return;
    };
    let error_text = unsafe { strings::read(error_text) }.unwrap_or_default();
    let failed_url = unsafe { strings::read(failed_url) }.unwrap_or_default();
    warn!("[Client] load failed for {failed_url}: {error_text} ({error_code})");
    frame.load_url(&data_uri(&error_page(&failed_url, &error_text, error_code), "text/html"));
}

#[cfg(windows)]
fn platform_title_change(browser: &Browser, title: &str) {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::SetWindowTextW;
    use windows::core::PCWSTR;

    let handle = browser.host().window_handle();
    if handle.is_null() {
        return;
    }
    let mut title: Vec<u16> = title.encode_utf16().collect();
    title.push(0);
    if let Err(source) = unsafe { SetWindowTextW(HWND(handle), PCWSTR(title.as_ptr())) } {
        warn!("[Client] native title update failed: {source}");
    }
}

#[cfg(target_os = "linux")]
fn platform_title_change(browser: &Browser, title: &str) {
    // Retitling the X window would need an X client connection the shell
    // does not keep.
    let handle = browser.host().window_handle();
    debug!("[Client] title for native window {handle}: {title}");
}

/// Data URI carrying `contents`; the base64 payload is additionally
/// URI-encoded for safe embedding.
fn data_uri(contents: &str, mime_type: &str) -> String {
    format!(
        "data:{mime_type};base64,{}",
        strings::uri_encode(&strings::base64_encode(contents.as_bytes()), false)
    )
}

fn error_page(failed_url: &str, error_text: &str, error_code: cef_errorcode_t) -> String {
    format!(
        "<html><body bgcolor=\"white\"><h2>Failed to load URL {failed_url} with error \
         {error_text} ({error_code}).</h2></body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_names_the_url_and_the_error() {
        let page = error_page("https://gone.test/", "ERR_NAME_NOT_RESOLVED", -105);
        assert!(page.contains("https://gone.test/"));
        assert!(page.contains("ERR_NAME_NOT_RESOLVED"));
        assert!(page.contains("(-105)"));
        assert!(page.starts_with("<html>"));
    }

    #[test]
    fn client_state_starts_open() {
        let state = ClientState::new(RuntimeStyle::Default);
        assert!(!state.is_closing());
        assert!(state.browsers.lock().is_empty());
    }
}
