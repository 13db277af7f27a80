//! Closure posting onto the engine's UI thread.

use std::mem;

use log::warn;
use parking_lot::Mutex;

use crate::bindings::capi::{TID_UI, cef_task_t};
use crate::cef::refcount::{self, shared_state};
use crate::dynamic_cef_library_loader as loader;

type Work = Box<dyn FnOnce() + Send>;

struct TaskState {
    work: Mutex<Option<Work>>,
}

/// True when the caller runs on the engine's browser-process UI thread.
pub fn currently_on_ui_thread() -> bool {
    let engine = loader::get();
    unsafe { (engine.cef_currently_on)(TID_UI) != 0 }
}

/// Ends the engine message loop started by the bootstrap.
pub fn quit_message_loop() {
    let engine = loader::get();
    unsafe { (engine.cef_quit_message_loop)() };
}

/// Queues `work` onto the UI thread. The closure runs at most once; when the
/// loop is already gone it is dropped unrun.
pub fn post_to_ui<F>(work: F)
where
    F: FnOnce() + Send + 'static,
{
    let mut table: cef_task_t = unsafe { mem::zeroed() };
    table.execute = Some(execute);
    let task = refcount::allocate(
        table,
        TaskState {
            work: Mutex::new(Some(Box::new(work))),
        },
    );

    let engine = loader::get();
    let posted = unsafe { (engine.cef_post_task)(TID_UI, task.into_raw()) } != 0;
    if !posted {
        warn!("[Tasks] UI task not posted; the message loop is gone");
    }
}

unsafe extern "system" fn execute(self_: *mut cef_task_t) {
    let state = unsafe { shared_state::<cef_task_t, TaskState>(self_) };
    if let Some(work) = state.work.lock().take() {
        work();
    }
}
