//! A host shell for an embedded Chromium engine, consumed through its C API
//! as a runtime-loaded shared library.
//!
//! - Loads the engine library from a resolvable directory
//! - Relays engine sub-process invocations and forwards their exit codes
//! - Derives the launch configuration from startup switches
//! - Opens one browser window, Views-managed or in a raw platform window
//! - Answers the engine's host callbacks (life span, titles, load errors)
//! - Runs the message loop until the last window closes, then shuts down

#[cfg(not(any(windows, target_os = "linux")))]
compile_error!("this shell only targets Windows and Linux hosts");

pub mod app;
pub mod bindings;
pub mod cef;
pub mod constants;
pub mod dynamic_cef_library_loader;
pub mod handler;
pub mod startup;
pub mod window;

use std::mem;
use std::path::Path;
use std::ptr;
use std::sync::Once;

use anyhow::Result;
use env_logger::{Builder, Env};
use log::{debug, info, warn};

use crate::bindings::capi::{cef_main_args_t, cef_settings_t};
use crate::dynamic_cef_library_loader as loader;
pub use crate::dynamic_cef_library_loader::{CefLibrary, CefLoadError};
pub use crate::startup::{
    ArgvSwitches, LaunchConfig, RuntimeStyle, ShowState, SwitchSource, WindowMode,
};

// The shell can be re-entered from a host process; the logger installs once.
static LOGGER_INIT: Once = Once::new();

/// One-time logging setup; respects `RUST_LOG`, defaults to `info`.
pub fn init_logging() {
    LOGGER_INIT.call_once(|| {
        Builder::from_env(Env::default().default_filter_or("info")).init();
    });
}

/// Runs the whole shell and returns the process exit code.
///
/// `engine_dir` overrides the engine library location; `None` falls back to
/// the `CEF_SHELL_ENGINE_DIR` environment variable and then the directory of
/// the running executable.
pub fn run(engine_dir: Option<&Path>) -> Result<i32> {
    init_logging();

    // --- 1) Locate and load the engine library ---
    let dir = loader::resolve_engine_dir(engine_dir);
    let engine = loader::install(CefLibrary::load(&dir)?);
    log_engine_version(engine);

    // --- 2) Relay sub-process invocations straight to the engine ---
    //     Renderer, GPU and utility processes re-run this executable; the
    //     engine does all their work and their exit code is returned
    //     verbatim. Only the browser process continues past this point.
    if let Some(process_type) = startup::process_type() {
        debug!("[Bootstrap] dispatching {process_type} sub-process");
    }
    let main_args = MainArgs::for_process();
    let code =
        unsafe { (engine.cef_execute_process)(&main_args.raw, ptr::null_mut(), ptr::null_mut()) };
    if code >= 0 {
        return Ok(code);
    }

    // --- 3) Initialize the browser process ---
    //     The first window is created from the context-initialized callback.
    let settings = cef_settings_t {
        size: mem::size_of::<cef_settings_t>(),
        no_sandbox: 1,
        ..Default::default()
    };
    let app = app::make_app();
    let initialized =
        unsafe { (engine.cef_initialize)(&main_args.raw, &settings, app.into_raw(), ptr::null_mut()) }
            != 0;
    if !initialized {
        // Initialization also bails out on purpose when another instance
        // already owns the profile; the engine's exit code says which.
        let code = unsafe { (engine.cef_get_exit_code)() };
        warn!("[Bootstrap] engine initialization did not complete (exit code {code})");
        return Ok(code);
    }

    // --- 4) Close windows politely on Ctrl-C so shutdown still runs ---
    if let Err(source) = ctrlc::set_handler(request_close_all) {
        warn!("[Bootstrap] Ctrl-C handler not installed: {source}");
    }

    // --- 5) Message loop; returns once the last window closed ---
    info!("[Bootstrap] entering the message loop");
    unsafe { (engine.cef_run_message_loop)() };

    // --- 6) Teardown ---
    unsafe { (engine.cef_shutdown)() };
    info!("[Bootstrap] engine shut down");
    Ok(0)
}

fn request_close_all() {
    info!("[Bootstrap] interrupt received; closing all windows");
    if let Some(state) = handler::instance() {
        handler::close_all_browsers(&state, false);
    }
}

fn log_engine_version(engine: &CefLibrary) {
    let entry = |index| unsafe { (engine.cef_version_info)(index) };
    info!(
        "[Bootstrap] engine {}.{}.{} (chromium {}.{}.{}.{})",
        entry(0),
        entry(1),
        entry(2),
        entry(4),
        entry(5),
        entry(6),
        entry(7)
    );
}

/// Per-platform engine main arguments, owning any buffers they point into.
struct MainArgs {
    raw: cef_main_args_t,
    #[cfg(target_os = "linux")]
    _argv: Vec<*mut std::os::raw::c_char>,
    #[cfg(target_os = "linux")]
    _args: Vec<std::ffi::CString>,
}

#[cfg(windows)]
impl MainArgs {
    fn for_process() -> MainArgs {
        use windows::Win32::System::LibraryLoader::GetModuleHandleW;

        let instance = unsafe { GetModuleHandleW(None) }
            .map(|module| module.0)
            .unwrap_or(ptr::null_mut());
        MainArgs {
            raw: cef_main_args_t { instance },
        }
    }
}

#[cfg(target_os = "linux")]
impl MainArgs {
    fn for_process() -> MainArgs {
        use std::ffi::CString;
        use std::os::raw::{c_char, c_int};
        use std::os::unix::ffi::OsStringExt;

        let args: Vec<CString> = std::env::args_os()
            .map(|arg| CString::new(arg.into_vec()).unwrap_or_default())
            .collect();
        let mut argv: Vec<*mut c_char> =
            args.iter().map(|arg| arg.as_ptr() as *mut c_char).collect();
        let raw = cef_main_args_t {
            argc: argv.len() as c_int,
            argv: argv.as_mut_ptr(),
        };
        MainArgs {
            raw,
            _argv: argv,
            _args: args,
        }
    }
}
