//! Host-side reference counting for engine callback objects.
//!
//! Every engine interface struct starts with a `cef_base_ref_counted_t`.
//! Objects this shell hands to the engine follow the same contract: the
//! count starts at one, `add_ref`/`release` move it atomically, and the
//! object frees itself when the count reaches zero.

use std::mem;
use std::os::raw::c_int;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::bindings::capi::{
    cef_app_t, cef_base_ref_counted_t, cef_browser_process_handler_t,
    cef_browser_view_delegate_t, cef_client_t, cef_display_handler_t, cef_life_span_handler_t,
    cef_load_handler_t, cef_task_t, cef_window_delegate_t,
};

/// Marker for engine structs this shell allocates. Implementations promise
/// the struct is `#[repr(C)]` and starts with `cef_base_ref_counted_t`,
/// directly or through nested base structs.
pub unsafe trait CallbackTable: 'static {}

unsafe impl CallbackTable for cef_app_t {}
unsafe impl CallbackTable for cef_browser_process_handler_t {}
unsafe impl CallbackTable for cef_browser_view_delegate_t {}
unsafe impl CallbackTable for cef_client_t {}
unsafe impl CallbackTable for cef_display_handler_t {}
unsafe impl CallbackTable for cef_life_span_handler_t {}
unsafe impl CallbackTable for cef_load_handler_t {}
unsafe impl CallbackTable for cef_task_t {}
unsafe impl CallbackTable for cef_window_delegate_t {}

#[repr(C)]
struct RefCounted<C, S> {
    table: C,
    count: AtomicUsize,
    state: S,
}

/// Allocates a callback object from its filled-in function table and the
/// shared state its callbacks read. The returned handle owns the initial
/// reference.
pub fn allocate<C, S>(table: C, state: S) -> HostRef<C>
where
    C: CallbackTable,
    S: Send + Sync + 'static,
{
    let object = Box::into_raw(Box::new(RefCounted {
        table,
        count: AtomicUsize::new(1),
        state,
    }));
    let base = object as *mut cef_base_ref_counted_t;
    unsafe {
        (*base).size = mem::size_of::<C>();
        (*base).add_ref = Some(add_ref::<C, S>);
        (*base).release = Some(release::<C, S>);
        (*base).has_one_ref = Some(has_one_ref::<C, S>);
        (*base).has_at_least_one_ref = Some(has_at_least_one_ref::<C, S>);
    }
    HostRef {
        raw: object as *mut C,
    }
}

/// The state stored alongside `raw` by [`allocate`]. Callers must pass the
/// same `C`/`S` pair the object was allocated with, and the object must
/// still hold at least one reference.
pub unsafe fn shared_state<'a, C, S>(raw: *mut C) -> &'a S
where
    C: CallbackTable,
    S: Send + Sync + 'static,
{
    unsafe { &(*(raw as *mut RefCounted<C, S>)).state }
}

/// Owned reference to a host-allocated callback object.
pub struct HostRef<C: CallbackTable> {
    raw: *mut C,
}

impl<C: CallbackTable> HostRef<C> {
    /// Borrows the raw pointer without touching the count.
    pub fn as_raw(&self) -> *mut C {
        self.raw
    }

    /// Transfers the caller's reference, for engine functions that consume
    /// their argument.
    pub fn into_raw(self) -> *mut C {
        let raw = self.raw;
        mem::forget(self);
        raw
    }

    /// Takes an additional reference and returns the pointer; for callback
    /// return values, which hand the engine a reference of its own.
    pub fn retained_raw(&self) -> *mut C {
        unsafe { add_ref_raw(self.raw as *mut cef_base_ref_counted_t) };
        self.raw
    }
}

impl<C: CallbackTable> Drop for HostRef<C> {
    fn drop(&mut self) {
        unsafe { release_raw(self.raw as *mut cef_base_ref_counted_t) };
    }
}

// The count is atomic and `allocate` requires `S: Send + Sync`; whichever
// thread drops the last reference frees the object.
unsafe impl<C: CallbackTable> Send for HostRef<C> {}
unsafe impl<C: CallbackTable> Sync for HostRef<C> {}

/// Takes a reference on any engine ref-counted object.
pub unsafe fn add_ref_raw(object: *mut cef_base_ref_counted_t) {
    if let Some(add_ref) = unsafe { (*object).add_ref } {
        unsafe { add_ref(object) };
    }
}

/// Releases a reference on any engine ref-counted object.
pub unsafe fn release_raw(object: *mut cef_base_ref_counted_t) {
    if let Some(release) = unsafe { (*object).release } {
        unsafe { release(object) };
    }
}

unsafe extern "system" fn add_ref<C, S>(base: *mut cef_base_ref_counted_t)
where
    C: CallbackTable,
    S: Send + Sync + 'static,
{
    let object = base as *mut RefCounted<C, S>;
    unsafe { (*object).count.fetch_add(1, Ordering::Relaxed) };
}

unsafe extern "system" fn release<C, S>(base: *mut cef_base_ref_counted_t) -> c_int
where
    C: CallbackTable,
    S: Send + Sync + 'static,
{
    let object = base as *mut RefCounted<C, S>;
    if unsafe { (*object).count.fetch_sub(1, Ordering::AcqRel) } == 1 {
        drop(unsafe { Box::from_raw(object) });
        return 1;
    }
    0
}

unsafe extern "system" fn has_one_ref<C, S>(base: *mut cef_base_ref_counted_t) -> c_int
where
    C: CallbackTable,
    S: Send + Sync + 'static,
{
    let object = base as *mut RefCounted<C, S>;
    (unsafe { (*object).count.load(Ordering::Acquire) } == 1) as c_int
}

unsafe extern "system" fn has_at_least_one_ref<C, S>(base: *mut cef_base_ref_counted_t) -> c_int
where
    C: CallbackTable,
    S: Send + Sync + 'static,
{
    let object = base as *mut RefCounted<C, S>;
    (unsafe { (*object).count.load(Ordering::Acquire) } >= 1) as c_int
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    use super::*;

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    fn blank_task() -> cef_task_t {
        unsafe { mem::zeroed() }
    }

    fn base_of(raw: *mut cef_task_t) -> *mut cef_base_ref_counted_t {
        raw as *mut cef_base_ref_counted_t
    }

    #[test]
    fn drops_state_with_the_last_reference() {
        let dropped = Arc::new(AtomicBool::new(false));
        let object = allocate(blank_task(), DropFlag(Arc::clone(&dropped)));
        let raw = object.retained_raw();
        drop(object);
        assert!(!dropped.load(Ordering::SeqCst));
        unsafe { release_raw(base_of(raw)) };
        assert!(dropped.load(Ordering::SeqCst));
    }

    #[test]
    fn reports_reference_counts_through_the_base() {
        let object = allocate(blank_task(), ());
        let base = base_of(object.as_raw());
        let has_one = unsafe { (*base).has_one_ref }.expect("has_one_ref slot");
        let has_any = unsafe { (*base).has_at_least_one_ref }.expect("has_at_least_one_ref slot");
        assert_eq!(unsafe { has_one(base) }, 1);

        let extra = object.retained_raw();
        assert_eq!(unsafe { has_one(base) }, 0);
        assert_eq!(unsafe { has_any(base) }, 1);

        unsafe { release_raw(base_of(extra)) };
        assert_eq!(unsafe { has_one(base) }, 1);
    }

    #[test]
    fn records_the_table_size_in_the_base() {
        let object = allocate(blank_task(), ());
        let base = base_of(object.as_raw());
        assert_eq!(unsafe { (*base).size }, mem::size_of::<cef_task_t>());
    }

    #[test]
    fn shared_state_reads_the_allocation_state() {
        let object = allocate(blank_task(), String::from("ui-task"));
        let state = unsafe { shared_state::<cef_task_t, String>(object.as_raw()) };
        assert_eq!(state, "ui-task");
    }
}
