//! Owned wrappers over engine browser objects.

use std::os::raw::c_int;

use crate::bindings::capi::{
    cef_base_ref_counted_t, cef_browser_host_t, cef_browser_t, cef_frame_t, cef_window_handle_t,
};
use crate::cef::refcount::{add_ref_raw, release_raw};
use crate::cef::strings::CefString;
use crate::cef::table_fn;

/// A browser the engine allocated. Holds one reference.
pub struct Browser {
    raw: *mut cef_browser_t,
}

impl Browser {
    /// Wraps a reference the caller already owns (function return values).
    pub unsafe fn from_owned(raw: *mut cef_browser_t) -> Option<Browser> {
        if raw.is_null() {
            None
        } else {
            Some(Browser { raw })
        }
    }

    /// Wraps a borrowed callback argument, taking a reference of our own.
    pub unsafe fn from_borrowed(raw: *mut cef_browser_t) -> Option<Browser> {
        if raw.is_null() {
            None
        } else {
            unsafe { add_ref_raw(raw as *mut cef_base_ref_counted_t) };
            Some(Browser { raw })
        }
    }

    pub fn as_raw(&self) -> *mut cef_browser_t {
        self.raw
    }

    /// Engine-assigned browser id, unique within the process.
    pub fn identifier(&self) -> c_int {
        let get_identifier = table_fn!(self.raw, get_identifier);
        unsafe { get_identifier(self.raw) }
    }

    pub fn host(&self) -> BrowserHost {
        let get_host = table_fn!(self.raw, get_host);
        let raw = unsafe { get_host(self.raw) };
        unsafe { BrowserHost::from_owned(raw) }.expect("browser without a host")
    }

    /// Identity comparison through the engine; distinct wrapper pointers can
    /// name the same browser.
    pub fn is_same(&self, other: &Browser) -> bool {
        let is_same = table_fn!(self.raw, is_same);
        unsafe {
            // The callee consumes a reference to its argument.
            add_ref_raw(other.raw as *mut cef_base_ref_counted_t);
            is_same(self.raw, other.raw) != 0
        }
    }
}

impl Clone for Browser {
    fn clone(&self) -> Browser {
        unsafe { add_ref_raw(self.raw as *mut cef_base_ref_counted_t) };
        Browser { raw: self.raw }
    }
}

impl Drop for Browser {
    fn drop(&mut self) {
        unsafe { release_raw(self.raw as *mut cef_base_ref_counted_t) };
    }
}

// Engine counts are atomic and browser objects may be released from any
// thread; the methods above stay on the UI thread by convention.
unsafe impl Send for Browser {}
unsafe impl Sync for Browser {}

/// The host side of a browser: window handle and close control.
pub struct BrowserHost {
    raw: *mut cef_browser_host_t,
}

impl BrowserHost {
    pub unsafe fn from_owned(raw: *mut cef_browser_host_t) -> Option<BrowserHost> {
        if raw.is_null() {
            None
        } else {
            Some(BrowserHost { raw })
        }
    }

    /// Requests a browser close. A polite close gives unload handlers a
    /// say; a forced one does not.
    pub fn close_browser(&self, force_close: bool) {
        let close_browser = table_fn!(self.raw, close_browser);
        unsafe { close_browser(self.raw, force_close as c_int) };
    }

    /// Close attempt that reports whether the browser agreed; used from
    /// window can-close hooks.
    pub fn try_close_browser(&self) -> bool {
        let try_close_browser = table_fn!(self.raw, try_close_browser);
        unsafe { try_close_browser(self.raw) != 0 }
    }

    /// The platform window handle, for browsers hosted in a native window.
    pub fn window_handle(&self) -> cef_window_handle_t {
        let get_window_handle = table_fn!(self.raw, get_window_handle);
        unsafe { get_window_handle(self.raw) }
    }
}

impl Drop for BrowserHost {
    fn drop(&mut self) {
        unsafe { release_raw(self.raw as *mut cef_base_ref_counted_t) };
    }
}

/// A frame within a browser. Holds one reference.
pub struct Frame {
    raw: *mut cef_frame_t,
}

impl Frame {
    pub unsafe fn from_borrowed(raw: *mut cef_frame_t) -> Option<Frame> {
        if raw.is_null() {
            None
        } else {
            unsafe { add_ref_raw(raw as *mut cef_base_ref_counted_t) };
            Some(Frame { raw })
        }
    }

    pub fn load_url(&self, url: &str) {
        let load_url = table_fn!(self.raw, load_url);
        let url = CefString::new(url);
        unsafe { load_url(self.raw, url.as_ptr()) };
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        unsafe { release_raw(self.raw as *mut cef_base_ref_counted_t) };
    }
}
