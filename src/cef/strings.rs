//! UTF-16 string handling for the engine boundary.

use std::os::raw::{c_int, c_void};

use crate::bindings::capi::{cef_string_t, cef_string_userfree_t, cef_string_utf16_t};
use crate::dynamic_cef_library_loader as loader;

/// An owned UTF-16 string in the engine's wire layout.
///
/// The raw view carries no destructor, so the engine copies the contents
/// instead of taking ownership; the buffer must outlive every call the view
/// is passed to.
pub struct CefString {
    _buffer: Vec<u16>,
    raw: cef_string_utf16_t,
}

impl CefString {
    pub fn new(value: &str) -> CefString {
        let mut buffer: Vec<u16> = value.encode_utf16().collect();
        let raw = cef_string_utf16_t {
            str_: buffer.as_mut_ptr(),
            length: buffer.len(),
            dtor: None,
        };
        CefString {
            _buffer: buffer,
            raw,
        }
    }

    /// Pointer form for `*const cef_string_t` parameters.
    pub fn as_ptr(&self) -> *const cef_string_t {
        &self.raw
    }

    /// Value form for inline `cef_string_t` struct fields. The engine copies
    /// such fields during the call that receives them; `self` must stay
    /// alive until then.
    pub fn as_value(&self) -> cef_string_t {
        self.raw
    }
}

/// Copies out a UTF-16 string the engine owns. Returns `None` for a null
/// pointer; an empty engine string comes back as `Some("")`.
pub unsafe fn read(raw: *const cef_string_t) -> Option<String> {
    if raw.is_null() {
        return None;
    }
    let view = unsafe { &*raw };
    if view.str_.is_null() || view.length == 0 {
        return Some(String::new());
    }
    let units = unsafe { std::slice::from_raw_parts(view.str_, view.length) };
    Some(String::from_utf16_lossy(units))
}

/// Copies out an engine-allocated string and hands the allocation straight
/// back to the engine.
pub unsafe fn read_userfree(raw: cef_string_userfree_t) -> Option<String> {
    if raw.is_null() {
        return None;
    }
    let value = unsafe { read(raw) };
    let engine = loader::get();
    unsafe { (engine.cef_string_userfree_utf16_free)(raw) };
    value
}

/// Base64 through the engine's exported encoder.
pub fn base64_encode(data: &[u8]) -> String {
    let engine = loader::get();
    let encoded =
        unsafe { (engine.cef_base64_encode)(data.as_ptr() as *const c_void, data.len()) };
    unsafe { read_userfree(encoded) }.unwrap_or_default()
}

/// Percent-encoding through the engine's exported encoder.
pub fn uri_encode(text: &str, use_plus: bool) -> String {
    let engine = loader::get();
    let text = CefString::new(text);
    let encoded = unsafe { (engine.cef_uriencode)(text.as_ptr(), use_plus as c_int) };
    unsafe { read_userfree(encoded) }.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_raw_view() {
        let value = CefString::new("cef-shell Straße");
        let raw = value.as_value();
        let read_back = unsafe { read(&raw) }.expect("non-null view");
        assert_eq!(read_back, "cef-shell Straße");
    }

    #[test]
    fn empty_string_has_no_contents_and_no_dtor() {
        let value = CefString::new("");
        let raw = value.as_value();
        assert_eq!(raw.length, 0);
        assert!(raw.dtor.is_none());
        assert_eq!(unsafe { read(&raw) }.as_deref(), Some(""));
    }

    #[test]
    fn null_reads_as_none() {
        assert_eq!(unsafe { read(std::ptr::null()) }, None);
    }

    #[test]
    fn astral_plane_characters_take_two_units() {
        let value = CefString::new("𝄞");
        assert_eq!(value.as_value().length, 2);
    }
}
