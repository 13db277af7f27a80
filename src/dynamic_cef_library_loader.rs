//! Runtime loading of the engine shared library.
//!
//! The engine ships as a platform library (`libcef.dll` / `libcef.so`) next
//! to its resource files and is never linked at build time. [`CefLibrary`]
//! loads it once, resolves every exported entry point this shell calls
//! eagerly, and stays alive for the rest of the process; engine code keeps
//! running on background threads until shutdown, so the handle is
//! intentionally leaked.

use std::env;
use std::os::raw::{c_int, c_void};
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use log::{debug, warn};
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::bindings::capi::{
    cef_app_t, cef_browser_settings_t, cef_browser_t, cef_browser_view_delegate_t,
    cef_browser_view_t, cef_client_t, cef_command_line_t, cef_dictionary_value_t,
    cef_main_args_t, cef_request_context_t, cef_settings_t, cef_string_t,
    cef_string_userfree_t, cef_task_t, cef_thread_id_t, cef_window_delegate_t,
    cef_window_info_t, cef_window_t,
};
use crate::constants::{ENGINE_DIR_ENV, ENGINE_LIBRARY_NAME};

/// Why the engine library could not be brought up.
#[derive(Debug, Error)]
pub enum CefLoadError {
    #[error("engine library not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to load engine library {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("engine library {} is missing symbol `{symbol}`", path.display())]
    MissingSymbol {
        symbol: &'static str,
        path: PathBuf,
    },
}

/// The loaded engine library with all entry points resolved.
#[derive(Debug)]
pub struct CefLibrary {
    _lib: &'static Library,

    // Process bring-up and teardown.
    pub cef_version_info: Symbol<'static, unsafe extern "C" fn(entry: c_int) -> c_int>,
    pub cef_execute_process: Symbol<
        'static,
        unsafe extern "C" fn(
            args: *const cef_main_args_t,
            application: *mut cef_app_t,
            windows_sandbox_info: *mut c_void,
        ) -> c_int,
    >,
    pub cef_initialize: Symbol<
        'static,
        unsafe extern "C" fn(
            args: *const cef_main_args_t,
            settings: *const cef_settings_t,
            application: *mut cef_app_t,
            windows_sandbox_info: *mut c_void,
        ) -> c_int,
    >,
    pub cef_get_exit_code: Symbol<'static, unsafe extern "C" fn() -> c_int>,
    pub cef_run_message_loop: Symbol<'static, unsafe extern "C" fn()>,
    pub cef_quit_message_loop: Symbol<'static, unsafe extern "C" fn()>,
    pub cef_shutdown: Symbol<'static, unsafe extern "C" fn()>,

    // Thread checks and task posting.
    pub cef_currently_on: Symbol<'static, unsafe extern "C" fn(thread_id: cef_thread_id_t) -> c_int>,
    pub cef_post_task: Symbol<
        'static,
        unsafe extern "C" fn(thread_id: cef_thread_id_t, task: *mut cef_task_t) -> c_int,
    >,

    // Command line.
    pub cef_command_line_get_global:
        Symbol<'static, unsafe extern "C" fn() -> *mut cef_command_line_t>,

    // Browser and window factories.
    pub cef_browser_host_create_browser: Symbol<
        'static,
        unsafe extern "C" fn(
            window_info: *const cef_window_info_t,
            client: *mut cef_client_t,
            url: *const cef_string_t,
            settings: *const cef_browser_settings_t,
            extra_info: *mut cef_dictionary_value_t,
            request_context: *mut cef_request_context_t,
        ) -> c_int,
    >,
    pub cef_browser_view_create: Symbol<
        'static,
        unsafe extern "C" fn(
            client: *mut cef_client_t,
            url: *const cef_string_t,
            settings: *const cef_browser_settings_t,
            extra_info: *mut cef_dictionary_value_t,
            request_context: *mut cef_request_context_t,
            delegate: *mut cef_browser_view_delegate_t,
        ) -> *mut cef_browser_view_t,
    >,
    pub cef_browser_view_get_for_browser:
        Symbol<'static, unsafe extern "C" fn(browser: *mut cef_browser_t) -> *mut cef_browser_view_t>,
    pub cef_window_create_top_level: Symbol<
        'static,
        unsafe extern "C" fn(delegate: *mut cef_window_delegate_t) -> *mut cef_window_t,
    >,

    // String and encoding helpers.
    pub cef_string_userfree_utf16_free:
        Symbol<'static, unsafe extern "C" fn(str_: cef_string_userfree_t)>,
    pub cef_base64_encode: Symbol<
        'static,
        unsafe extern "C" fn(data: *const c_void, data_size: usize) -> cef_string_userfree_t,
    >,
    pub cef_uriencode: Symbol<
        'static,
        unsafe extern "C" fn(text: *const cef_string_t, use_plus: c_int) -> cef_string_userfree_t,
    >,
}

impl CefLibrary {
    /// Loads the engine library from `dir` and resolves every entry point.
    pub fn load(dir: &Path) -> Result<CefLibrary, CefLoadError> {
        let library_path = dir.join(ENGINE_LIBRARY_NAME);
        if !library_path.is_file() {
            return Err(CefLoadError::NotFound { path: library_path });
        }
        // The engine aborts startup itself when its ICU data is unusable;
        // an early warning names the directory to fix.
        if !dir.join("icudtl.dat").is_file() {
            warn!(
                "[Engine Loader] icudtl.dat not found next to {}; engine startup may fail",
                library_path.display()
            );
        }

        let library: &'static Library = Box::leak(Box::new(
            unsafe { Library::new(&library_path) }.map_err(|source| CefLoadError::Load {
                path: library_path.clone(),
                source,
            })?,
        ));

        macro_rules! load_symbol {
            ($name:literal) => {
                unsafe { library.get(concat!($name, "\0").as_bytes()) }.map_err(|_| {
                    CefLoadError::MissingSymbol {
                        symbol: $name,
                        path: library_path.clone(),
                    }
                })?
            };
        }

        let engine = CefLibrary {
            _lib: library,
            cef_version_info: load_symbol!("cef_version_info"),
            cef_execute_process: load_symbol!("cef_execute_process"),
            cef_initialize: load_symbol!("cef_initialize"),
            cef_get_exit_code: load_symbol!("cef_get_exit_code"),
            cef_run_message_loop: load_symbol!("cef_run_message_loop"),
            cef_quit_message_loop: load_symbol!("cef_quit_message_loop"),
            cef_shutdown: load_symbol!("cef_shutdown"),
            cef_currently_on: load_symbol!("cef_currently_on"),
            cef_post_task: load_symbol!("cef_post_task"),
            cef_command_line_get_global: load_symbol!("cef_command_line_get_global"),
            cef_browser_host_create_browser: load_symbol!("cef_browser_host_create_browser"),
            cef_browser_view_create: load_symbol!("cef_browser_view_create"),
            cef_browser_view_get_for_browser: load_symbol!("cef_browser_view_get_for_browser"),
            cef_window_create_top_level: load_symbol!("cef_window_create_top_level"),
            cef_string_userfree_utf16_free: load_symbol!("cef_string_userfree_utf16_free"),
            cef_base64_encode: load_symbol!("cef_base64_encode"),
            cef_uriencode: load_symbol!("cef_uriencode"),
        };
        debug!(
            "[Engine Loader] resolved all entry points from {}",
            library_path.display()
        );
        Ok(engine)
    }
}

static ENGINE: OnceCell<CefLibrary> = OnceCell::new();

/// Publishes the loaded library for the whole process. The engine can only
/// be initialized once per process, so a second install keeps the first
/// library and warns.
pub fn install(library: CefLibrary) -> &'static CefLibrary {
    if ENGINE.set(library).is_err() {
        warn!("[Engine Loader] engine library already installed; keeping the existing one");
    }
    get()
}

/// The installed engine library. Panics when called before [`install`];
/// every caller runs after the bootstrap installed it.
pub fn get() -> &'static CefLibrary {
    ENGINE
        .get()
        .expect("engine library used before it was installed")
}

/// The directory the engine library is expected in: an explicit override,
/// then the `CEF_SHELL_ENGINE_DIR` environment variable, then the directory
/// of the running executable.
pub fn resolve_engine_dir(explicit: Option<&Path>) -> PathBuf {
    let env_override = env::var_os(ENGINE_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    pick_engine_dir(explicit.map(Path::to_path_buf), env_override, default_engine_dir())
}

fn pick_engine_dir(
    explicit: Option<PathBuf>,
    env_override: Option<PathBuf>,
    exe_dir: PathBuf,
) -> PathBuf {
    explicit.or(env_override).unwrap_or(exe_dir)
}

fn default_engine_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_reports_the_looked_up_path() {
        let dir = env::temp_dir().join(format!("cef-shell-missing-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let error = CefLibrary::load(&dir).expect_err("no engine library present");
        match &error {
            CefLoadError::NotFound { path } => {
                assert!(path.starts_with(&dir));
                assert!(path.ends_with(ENGINE_LIBRARY_NAME));
            }
            other => panic!("unexpected error: {other}"),
        }
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn explicit_directory_wins() {
        let picked = pick_engine_dir(
            Some(PathBuf::from("/opt/engine")),
            Some(PathBuf::from("/env/engine")),
            PathBuf::from("/exe"),
        );
        assert_eq!(picked, PathBuf::from("/opt/engine"));
    }

    #[test]
    fn environment_override_beats_the_exe_directory() {
        let picked = pick_engine_dir(
            None,
            Some(PathBuf::from("/env/engine")),
            PathBuf::from("/exe"),
        );
        assert_eq!(picked, PathBuf::from("/env/engine"));
    }

    #[test]
    fn exe_directory_is_the_fallback() {
        let picked = pick_engine_dir(None, None, PathBuf::from("/exe"));
        assert_eq!(picked, PathBuf::from("/exe"));
    }
}
