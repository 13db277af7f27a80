//! Wrappers over the engine's C API objects.
//!
//! Two ownership worlds meet here: objects the engine allocates (owned
//! handles in [`browser`], [`views`] and [`command_line`]) and callback
//! objects this shell allocates for the engine ([`refcount`]). Both sides
//! follow the C API translation rules: function returns transfer one
//! reference, parameters are borrowed and must be add-ref'd before they are
//! kept or passed on.

pub mod browser;
pub mod command_line;
pub mod refcount;
pub mod strings;
pub mod task;
pub mod views;

/// Resolves a required slot of an engine-provided function table.
macro_rules! table_fn {
    ($table:expr, $slot:ident) => {
        unsafe { (*$table).$slot }
            .unwrap_or_else(|| panic!("engine table missing `{}`", stringify!($slot)))
    };
}
pub(crate) use table_fn;
