//! Wrapper over the engine's parsed command line.

use crate::bindings::capi::{cef_base_ref_counted_t, cef_command_line_t};
use crate::cef::refcount::release_raw;
use crate::cef::strings::{self, CefString};
use crate::cef::table_fn;
use crate::dynamic_cef_library_loader as loader;
use crate::startup::SwitchSource;

/// The command line the engine parsed for this process. Holds one
/// reference.
pub struct CommandLine {
    raw: *mut cef_command_line_t,
}

impl CommandLine {
    /// The process-global command line; available once the engine is
    /// initialized.
    pub fn global() -> Option<CommandLine> {
        let engine = loader::get();
        let raw = unsafe { (engine.cef_command_line_get_global)() };
        if raw.is_null() {
            None
        } else {
            Some(CommandLine { raw })
        }
    }
}

impl SwitchSource for CommandLine {
    fn has_switch(&self, name: &str) -> bool {
        let has_switch = table_fn!(self.raw, has_switch);
        let name = CefString::new(name);
        unsafe { has_switch(self.raw, name.as_ptr()) != 0 }
    }

    fn switch_value(&self, name: &str) -> Option<String> {
        let get_switch_value = table_fn!(self.raw, get_switch_value);
        let name = CefString::new(name);
        let value = unsafe { get_switch_value(self.raw, name.as_ptr()) };
        unsafe { strings::read_userfree(value) }.filter(|value| !value.is_empty())
    }
}

impl Drop for CommandLine {
    fn drop(&mut self) {
        unsafe { release_raw(self.raw as *mut cef_base_ref_counted_t) };
    }
}
