//! Owned wrappers over the engine's Views framework objects.

use std::ptr;

use crate::bindings::capi::{
    cef_base_ref_counted_t, cef_browser_settings_t, cef_browser_view_delegate_t,
    cef_browser_view_t, cef_client_t, cef_panel_t, cef_view_t, cef_window_delegate_t,
    cef_window_t,
};
use crate::cef::browser::Browser;
use crate::cef::refcount::{HostRef, add_ref_raw, release_raw};
use crate::cef::strings::CefString;
use crate::cef::table_fn;
use crate::dynamic_cef_library_loader as loader;

/// A browser view the engine allocated. Holds one reference.
pub struct BrowserView {
    raw: *mut cef_browser_view_t,
}

impl BrowserView {
    /// Wraps a reference the caller already owns (factory return values).
    pub unsafe fn from_owned(raw: *mut cef_browser_view_t) -> Option<BrowserView> {
        if raw.is_null() {
            None
        } else {
            Some(BrowserView { raw })
        }
    }

    /// Wraps a borrowed callback argument, taking a reference of our own.
    pub unsafe fn from_borrowed(raw: *mut cef_browser_view_t) -> Option<BrowserView> {
        if raw.is_null() {
            None
        } else {
            unsafe { add_ref_raw(raw as *mut cef_base_ref_counted_t) };
            Some(BrowserView { raw })
        }
    }

    /// The view hosting `browser`, when it lives in the Views framework.
    /// `None` for browsers in native windows.
    pub fn for_browser(browser: &Browser) -> Option<BrowserView> {
        let engine = loader::get();
        unsafe {
            // The lookup consumes a reference to its argument.
            add_ref_raw(browser.as_raw() as *mut cef_base_ref_counted_t);
            BrowserView::from_owned((engine.cef_browser_view_get_for_browser)(browser.as_raw()))
        }
    }

    pub fn as_raw(&self) -> *mut cef_browser_view_t {
        self.raw
    }

    pub fn browser(&self) -> Option<Browser> {
        let get_browser = table_fn!(self.raw, get_browser);
        unsafe { Browser::from_owned(get_browser(self.raw)) }
    }

    /// The top-level window this view is attached to, if any.
    pub fn window(&self) -> Option<Window> {
        let view = self.raw as *mut cef_view_t;
        let get_window = table_fn!(view, get_window);
        unsafe { Window::from_owned(get_window(view)) }
    }
}

impl Clone for BrowserView {
    fn clone(&self) -> BrowserView {
        unsafe { add_ref_raw(self.raw as *mut cef_base_ref_counted_t) };
        BrowserView { raw: self.raw }
    }
}

impl Drop for BrowserView {
    fn drop(&mut self) {
        unsafe { release_raw(self.raw as *mut cef_base_ref_counted_t) };
    }
}

// Held inside delegate state that the engine may release from any thread;
// the view methods themselves stay on the UI thread.
unsafe impl Send for BrowserView {}
unsafe impl Sync for BrowserView {}

/// A top-level Views window. Holds one reference.
pub struct Window {
    raw: *mut cef_window_t,
}

impl Window {
    pub unsafe fn from_owned(raw: *mut cef_window_t) -> Option<Window> {
        if raw.is_null() {
            None
        } else {
            Some(Window { raw })
        }
    }

    pub unsafe fn from_borrowed(raw: *mut cef_window_t) -> Option<Window> {
        if raw.is_null() {
            None
        } else {
            unsafe { add_ref_raw(raw as *mut cef_base_ref_counted_t) };
            Some(Window { raw })
        }
    }

    /// Attaches `view` as a child, handing the engine its own reference.
    pub fn add_child_view(&self, view: &BrowserView) {
        let panel = self.raw as *mut cef_panel_t;
        let add_child_view = table_fn!(panel, add_child_view);
        unsafe {
            add_ref_raw(view.as_raw() as *mut cef_base_ref_counted_t);
            add_child_view(panel, view.as_raw() as *mut cef_view_t);
        }
    }

    pub fn show(&self) {
        let show = table_fn!(self.raw, show);
        unsafe { show(self.raw) };
    }

    pub fn set_title(&self, title: &str) {
        let set_title = table_fn!(self.raw, set_title);
        let title = CefString::new(title);
        unsafe { set_title(self.raw, title.as_ptr()) };
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe { release_raw(self.raw as *mut cef_base_ref_counted_t) };
    }
}

/// Creates a browser view navigated to `url`. Consumes one reference each of
/// `client` and `delegate`.
pub fn create_browser_view(
    client: HostRef<cef_client_t>,
    url: &str,
    settings: &cef_browser_settings_t,
    delegate: HostRef<cef_browser_view_delegate_t>,
) -> Option<BrowserView> {
    let engine = loader::get();
    let url = CefString::new(url);
    unsafe {
        BrowserView::from_owned((engine.cef_browser_view_create)(
            client.into_raw(),
            url.as_ptr(),
            settings,
            ptr::null_mut(),
            ptr::null_mut(),
            delegate.into_raw(),
        ))
    }
}

/// Creates a top-level window driven by `delegate`. The engine calls back
/// into the delegate before this returns.
pub fn create_top_level_window(delegate: HostRef<cef_window_delegate_t>) -> Option<Window> {
    let engine = loader::get();
    unsafe { Window::from_owned((engine.cef_window_create_top_level)(delegate.into_raw())) }
}
