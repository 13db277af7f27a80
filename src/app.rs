//! The application object handed to the engine at initialization.

use std::mem;
use std::ptr;
use std::sync::Arc;

use log::info;

use crate::bindings::capi::{
    cef_app_t, cef_browser_process_handler_t, cef_browser_settings_t, cef_client_t,
};
use crate::cef::command_line::CommandLine;
use crate::cef::refcount::{self, HostRef};
use crate::cef::task;
use crate::handler;
use crate::startup::{LaunchConfig, WindowMode};
use crate::window;

struct AppCallbacks {
    browser_process_handler: HostRef<cef_browser_process_handler_t>,
}

/// Builds the application object for the engine's initialize call.
pub fn make_app() -> HostRef<cef_app_t> {
    let mut process_handler: cef_browser_process_handler_t = unsafe { mem::zeroed() };
    process_handler.on_context_initialized = Some(on_context_initialized);
    process_handler.get_default_client = Some(get_default_client);
    let browser_process_handler = refcount::allocate(process_handler, ());

    let mut app: cef_app_t = unsafe { mem::zeroed() };
    app.get_browser_process_handler = Some(get_browser_process_handler);
    refcount::allocate(
        app,
        AppCallbacks {
            browser_process_handler,
        },
    )
}

unsafe extern "system" fn get_browser_process_handler(
    self_: *mut cef_app_t,
) -> *mut cef_browser_process_handler_t {
    unsafe { refcount::shared_state::<cef_app_t, AppCallbacks>(self_) }
        .browser_process_handler
        .retained_raw()
}

/// First window creation, on the engine UI thread once the context is
/// ready.
unsafe extern "system" fn on_context_initialized(_self: *mut cef_browser_process_handler_t) {
    debug_assert!(task::currently_on_ui_thread());

    let config = CommandLine::global()
        .map(|command_line| LaunchConfig::from_switches(&command_line))
        .unwrap_or_default();
    info!(
        "[App] context initialized; {:?}/{:?} window for {}",
        config.window_mode, config.runtime_style, config.url
    );

    let state = handler::install(config.runtime_style);
    let client = handler::make_client(Arc::clone(&state));

    let browser_settings = cef_browser_settings_t {
        size: mem::size_of::<cef_browser_settings_t>(),
        ..Default::default()
    };

    match config.window_mode {
        WindowMode::ViewsManaged => window::create_views_window(client, &config, &browser_settings),
        WindowMode::NativeHandle => window::create_native_window(client, &config, &browser_settings),
    }
}

/// Called when a new browser window is created via the Chrome style UI.
unsafe extern "system" fn get_default_client(
    _self: *mut cef_browser_process_handler_t,
) -> *mut cef_client_t {
    match handler::instance() {
        Some(state) => handler::make_client(state).into_raw(),
        None => ptr::null_mut(),
    }
}
