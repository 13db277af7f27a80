// Hand-maintained declarations for the subset of the CEF C API this shell
// traffics in, tracking the cef_binary_140 header layout. Rules:
//
// * Struct fields appear in exact header order; every callback slot of a
//   struct the shell allocates is declared, even when left empty, because
//   the engine indexes them by offset.
// * Engine-allocated interfaces the shell only ever holds a pointer to are
//   opaque stubs.
// * CEF_CALLBACK is stdcall on 32-bit Windows and cdecl elsewhere, which is
//   exactly Rust's extern "system". Exported entry points (CEF_EXPORT) are
//   plain cdecl and live in the loader, not here.
//
// When bumping the engine version, regenerate a reference dump with the
// regenerate-bindings feature and diff it against this file.

use std::os::raw::{c_char, c_int, c_void};

// ---------------------------------------------------------------------------
// include/internal/cef_string_types.h, cef_string_list.h, cef_string_map.h
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cef_string_utf16_t {
    pub str_: *mut u16,
    pub length: usize,
    pub dtor: Option<unsafe extern "C" fn(str_: *mut u16)>,
}

impl Default for cef_string_utf16_t {
    fn default() -> Self {
        cef_string_utf16_t {
            str_: std::ptr::null_mut(),
            length: 0,
            dtor: None,
        }
    }
}

pub type cef_string_t = cef_string_utf16_t;
pub type cef_string_userfree_utf16_t = *mut cef_string_utf16_t;
pub type cef_string_userfree_t = cef_string_userfree_utf16_t;

pub type cef_string_list_t = *mut c_void;
pub type cef_string_map_t = *mut c_void;

// ---------------------------------------------------------------------------
// include/internal/cef_types_geometry.h
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct cef_point_t {
    pub x: c_int,
    pub y: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct cef_rect_t {
    pub x: c_int,
    pub y: c_int,
    pub width: c_int,
    pub height: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct cef_size_t {
    pub width: c_int,
    pub height: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct cef_insets_t {
    pub top: c_int,
    pub left: c_int,
    pub bottom: c_int,
    pub right: c_int,
}

// ---------------------------------------------------------------------------
// include/internal/cef_types.h (scalar aliases and enums used by the shell)
// ---------------------------------------------------------------------------

pub type cef_color_t = u32;

pub type cef_log_severity_t = c_int;
pub const LOGSEVERITY_DEFAULT: cef_log_severity_t = 0;
pub const LOGSEVERITY_VERBOSE: cef_log_severity_t = 1;
pub const LOGSEVERITY_DEBUG: cef_log_severity_t = LOGSEVERITY_VERBOSE;
pub const LOGSEVERITY_INFO: cef_log_severity_t = 2;
pub const LOGSEVERITY_WARNING: cef_log_severity_t = 3;
pub const LOGSEVERITY_ERROR: cef_log_severity_t = 4;
pub const LOGSEVERITY_FATAL: cef_log_severity_t = 5;
pub const LOGSEVERITY_DISABLE: cef_log_severity_t = 99;

pub type cef_state_t = c_int;
pub const STATE_DEFAULT: cef_state_t = 0;
pub const STATE_ENABLED: cef_state_t = 1;
pub const STATE_DISABLED: cef_state_t = 2;

pub type cef_runtime_style_t = c_int;
pub const CEF_RUNTIME_STYLE_DEFAULT: cef_runtime_style_t = 0;
pub const CEF_RUNTIME_STYLE_CHROME: cef_runtime_style_t = 1;
pub const CEF_RUNTIME_STYLE_ALLOY: cef_runtime_style_t = 2;

pub type cef_show_state_t = c_int;
pub const CEF_SHOW_STATE_NORMAL: cef_show_state_t = 1;
pub const CEF_SHOW_STATE_MINIMIZED: cef_show_state_t = 2;
pub const CEF_SHOW_STATE_MAXIMIZED: cef_show_state_t = 3;
pub const CEF_SHOW_STATE_FULLSCREEN: cef_show_state_t = 4;
pub const CEF_SHOW_STATE_HIDDEN: cef_show_state_t = 5;

pub type cef_thread_id_t = c_int;
pub const TID_UI: cef_thread_id_t = 0;
pub const TID_FILE_BACKGROUND: cef_thread_id_t = 1;
pub const TID_FILE_USER_VISIBLE: cef_thread_id_t = 2;
pub const TID_FILE_USER_BLOCKING: cef_thread_id_t = 3;
pub const TID_PROCESS_LAUNCHER: cef_thread_id_t = 4;
pub const TID_IO: cef_thread_id_t = 5;
pub const TID_RENDERER: cef_thread_id_t = 6;

// net error codes (include/internal/cef_net_error_pages.h subset)
pub type cef_errorcode_t = c_int;
pub const ERR_NONE: cef_errorcode_t = 0;
pub const ERR_FAILED: cef_errorcode_t = -2;
pub const ERR_ABORTED: cef_errorcode_t = -3;

// Enums that only appear in callback signatures the shell leaves empty.
pub type cef_transition_type_t = u32;
pub type cef_window_open_disposition_t = c_int;
pub type cef_preferences_type_t = c_int;
pub type cef_chrome_toolbar_type_t = c_int;
pub type cef_gesture_command_t = c_int;
pub type cef_docking_mode_t = c_int;
pub type cef_menu_anchor_position_t = c_int;
pub type cef_mouse_button_type_t = c_int;
pub type cef_zoom_command_t = c_int;
pub type cef_color_mode_t = c_int;
pub type cef_cursor_type_t = c_int;
pub type cef_process_id_t = c_int;
pub type cef_paint_element_type_t = c_int;
pub type cef_file_dialog_mode_t = c_int;
pub type cef_text_input_mode_t = c_int;

// ---------------------------------------------------------------------------
// include/internal/cef_types_win.h / cef_types_linux.h
// ---------------------------------------------------------------------------

#[cfg(windows)]
pub type cef_window_handle_t = *mut c_void; // HWND
#[cfg(target_os = "linux")]
pub type cef_window_handle_t = std::os::raw::c_ulong; // X11 Window

#[cfg(windows)]
pub type cef_cursor_handle_t = *mut c_void; // HCURSOR
#[cfg(target_os = "linux")]
pub type cef_cursor_handle_t = std::os::raw::c_ulong;

#[cfg(windows)]
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cef_main_args_t {
    pub instance: *mut c_void, // HINSTANCE
}

#[cfg(target_os = "linux")]
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cef_main_args_t {
    pub argc: c_int,
    pub argv: *mut *mut c_char,
}

#[cfg(windows)]
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cef_window_info_t {
    pub ex_style: u32,
    pub window_name: cef_string_t,
    pub style: u32,
    pub bounds: cef_rect_t,
    pub parent_window: cef_window_handle_t,
    pub menu: *mut c_void, // HMENU
    pub windowless_rendering_enabled: c_int,
    pub shared_texture_enabled: c_int,
    pub external_begin_frame_enabled: c_int,
    pub window: cef_window_handle_t,
    pub runtime_style: cef_runtime_style_t,
}

#[cfg(target_os = "linux")]
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cef_window_info_t {
    pub window_name: cef_string_t,
    pub bounds: cef_rect_t,
    pub parent_window: cef_window_handle_t,
    pub windowless_rendering_enabled: c_int,
    pub shared_texture_enabled: c_int,
    pub external_begin_frame_enabled: c_int,
    pub window: cef_window_handle_t,
    pub runtime_style: cef_runtime_style_t,
}

// ---------------------------------------------------------------------------
// include/internal/cef_types.h (process-wide and per-browser settings)
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct cef_settings_t {
    pub size: usize,
    pub no_sandbox: c_int,
    pub browser_subprocess_path: cef_string_t,
    pub framework_dir_path: cef_string_t,
    pub main_bundle_path: cef_string_t,
    pub multi_threaded_message_loop: c_int,
    pub external_message_pump: c_int,
    pub windowless_rendering_enabled: c_int,
    pub command_line_args_disabled: c_int,
    pub cache_path: cef_string_t,
    pub root_cache_path: cef_string_t,
    pub persist_session_cookies: c_int,
    pub user_agent: cef_string_t,
    pub user_agent_product: cef_string_t,
    pub locale: cef_string_t,
    pub log_file: cef_string_t,
    pub log_severity: cef_log_severity_t,
    pub log_items: c_int,
    pub javascript_flags: cef_string_t,
    pub resources_dir_path: cef_string_t,
    pub locales_dir_path: cef_string_t,
    pub remote_debugging_port: c_int,
    pub uncaught_exception_stack_size: c_int,
    pub background_color: cef_color_t,
    pub accept_language_list: cef_string_t,
    pub cookieable_schemes_list: cef_string_t,
    pub cookieable_schemes_exclude_defaults: c_int,
    pub chrome_policy_id: cef_string_t,
    pub chrome_app_icon_id: c_int,
    pub disable_signal_handlers: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct cef_browser_settings_t {
    pub size: usize,
    pub windowless_frame_rate: c_int,
    pub standard_font_family: cef_string_t,
    pub fixed_font_family: cef_string_t,
    pub serif_font_family: cef_string_t,
    pub sans_serif_font_family: cef_string_t,
    pub cursive_font_family: cef_string_t,
    pub fantasy_font_family: cef_string_t,
    pub default_font_size: c_int,
    pub default_fixed_font_size: c_int,
    pub minimum_font_size: c_int,
    pub minimum_logical_font_size: c_int,
    pub default_encoding: cef_string_t,
    pub remote_fonts: cef_state_t,
    pub javascript: cef_state_t,
    pub javascript_close_windows: cef_state_t,
    pub javascript_access_clipboard: cef_state_t,
    pub javascript_dom_paste: cef_state_t,
    pub image_loading: cef_state_t,
    pub image_shrink_standalone_to_fit: cef_state_t,
    pub text_area_resize: cef_state_t,
    pub tab_to_links: cef_state_t,
    pub local_storage: cef_state_t,
    pub webgl: cef_state_t,
    pub background_color: cef_color_t,
    pub chrome_status_bubble: cef_state_t,
    pub chrome_zoom_bubble: cef_state_t,
}

// ---------------------------------------------------------------------------
// include/capi/cef_base_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cef_base_ref_counted_t {
    pub size: usize,
    pub add_ref: Option<unsafe extern "system" fn(self_: *mut cef_base_ref_counted_t)>,
    pub release: Option<unsafe extern "system" fn(self_: *mut cef_base_ref_counted_t) -> c_int>,
    pub has_one_ref:
        Option<unsafe extern "system" fn(self_: *mut cef_base_ref_counted_t) -> c_int>,
    pub has_at_least_one_ref:
        Option<unsafe extern "system" fn(self_: *mut cef_base_ref_counted_t) -> c_int>,
}

// ---------------------------------------------------------------------------
// Interfaces the shell holds pointers to but never dereferences.
// ---------------------------------------------------------------------------

macro_rules! opaque_interface {
    ($($name:ident),+ $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )+
    };
}

opaque_interface!(
    cef_audio_handler_t,
    cef_box_layout_settings_t,
    cef_box_layout_t,
    cef_button_t,
    cef_command_handler_t,
    cef_composition_underline_t,
    cef_context_menu_handler_t,
    cef_cursor_info_t,
    cef_dialog_handler_t,
    cef_dictionary_value_t,
    cef_display_t,
    cef_domvisitor_t,
    cef_download_handler_t,
    cef_download_image_callback_t,
    cef_drag_data_t,
    cef_drag_handler_t,
    cef_draggable_region_t,
    cef_fill_layout_t,
    cef_find_handler_t,
    cef_focus_handler_t,
    cef_frame_handler_t,
    cef_image_t,
    cef_jsdialog_handler_t,
    cef_key_event_t,
    cef_keyboard_handler_t,
    cef_layout_t,
    cef_linux_window_properties_t,
    cef_menu_model_t,
    cef_mouse_event_t,
    cef_navigation_entry_visitor_t,
    cef_overlay_controller_t,
    cef_pdf_print_callback_t,
    cef_pdf_print_settings_t,
    cef_permission_handler_t,
    cef_popup_features_t,
    cef_preference_registrar_t,
    cef_print_handler_t,
    cef_process_message_t,
    cef_range_t,
    cef_render_handler_t,
    cef_render_process_handler_t,
    cef_request_context_handler_t,
    cef_request_context_t,
    cef_request_handler_t,
    cef_request_t,
    cef_resource_bundle_handler_t,
    cef_run_file_dialog_callback_t,
    cef_scheme_registrar_t,
    cef_scroll_view_t,
    cef_string_visitor_t,
    cef_textfield_t,
    cef_touch_event_t,
    cef_urlrequest_client_t,
    cef_urlrequest_t,
    cef_v8context_t,
);

// ---------------------------------------------------------------------------
// include/capi/cef_command_line_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_command_line_t {
    pub base: cef_base_ref_counted_t,
    pub is_valid: Option<unsafe extern "system" fn(self_: *mut cef_command_line_t) -> c_int>,
    pub is_read_only: Option<unsafe extern "system" fn(self_: *mut cef_command_line_t) -> c_int>,
    pub copy: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t) -> *mut cef_command_line_t,
    >,
    pub init_from_argv: Option<
        unsafe extern "system" fn(
            self_: *mut cef_command_line_t,
            argc: c_int,
            argv: *const *const c_char,
        ),
    >,
    pub init_from_string: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t, command_line: *const cef_string_t),
    >,
    pub reset: Option<unsafe extern "system" fn(self_: *mut cef_command_line_t)>,
    pub get_argv: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t, argv: cef_string_list_t),
    >,
    pub get_command_line_string: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t) -> cef_string_userfree_t,
    >,
    pub get_program: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t) -> cef_string_userfree_t,
    >,
    pub set_program: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t, program: *const cef_string_t),
    >,
    pub has_switches: Option<unsafe extern "system" fn(self_: *mut cef_command_line_t) -> c_int>,
    pub has_switch: Option<
        unsafe extern "system" fn(
            self_: *mut cef_command_line_t,
            name: *const cef_string_t,
        ) -> c_int,
    >,
    pub get_switch_value: Option<
        unsafe extern "system" fn(
            self_: *mut cef_command_line_t,
            name: *const cef_string_t,
        ) -> cef_string_userfree_t,
    >,
    pub get_switches: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t, switches: cef_string_map_t),
    >,
    pub append_switch: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t, name: *const cef_string_t),
    >,
    pub append_switch_with_value: Option<
        unsafe extern "system" fn(
            self_: *mut cef_command_line_t,
            name: *const cef_string_t,
            value: *const cef_string_t,
        ),
    >,
    pub has_arguments: Option<unsafe extern "system" fn(self_: *mut cef_command_line_t) -> c_int>,
    pub get_arguments: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t, arguments: cef_string_list_t),
    >,
    pub append_argument: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t, argument: *const cef_string_t),
    >,
    pub prepend_wrapper: Option<
        unsafe extern "system" fn(self_: *mut cef_command_line_t, wrapper: *const cef_string_t),
    >,
}

// ---------------------------------------------------------------------------
// include/capi/cef_task_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_task_t {
    pub base: cef_base_ref_counted_t,
    pub execute: Option<unsafe extern "system" fn(self_: *mut cef_task_t)>,
}

// ---------------------------------------------------------------------------
// include/capi/cef_frame_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_frame_t {
    pub base: cef_base_ref_counted_t,
    pub is_valid: Option<unsafe extern "system" fn(self_: *mut cef_frame_t) -> c_int>,
    pub undo: Option<unsafe extern "system" fn(self_: *mut cef_frame_t)>,
    pub redo: Option<unsafe extern "system" fn(self_: *mut cef_frame_t)>,
    pub cut: Option<unsafe extern "system" fn(self_: *mut cef_frame_t)>,
    pub copy: Option<unsafe extern "system" fn(self_: *mut cef_frame_t)>,
    pub paste: Option<unsafe extern "system" fn(self_: *mut cef_frame_t)>,
    pub paste_and_match_style: Option<unsafe extern "system" fn(self_: *mut cef_frame_t)>,
    pub del: Option<unsafe extern "system" fn(self_: *mut cef_frame_t)>,
    pub select_all: Option<unsafe extern "system" fn(self_: *mut cef_frame_t)>,
    pub view_source: Option<unsafe extern "system" fn(self_: *mut cef_frame_t)>,
    pub get_source: Option<
        unsafe extern "system" fn(self_: *mut cef_frame_t, visitor: *mut cef_string_visitor_t),
    >,
    pub get_text: Option<
        unsafe extern "system" fn(self_: *mut cef_frame_t, visitor: *mut cef_string_visitor_t),
    >,
    pub load_request:
        Option<unsafe extern "system" fn(self_: *mut cef_frame_t, request: *mut cef_request_t)>,
    pub load_url:
        Option<unsafe extern "system" fn(self_: *mut cef_frame_t, url: *const cef_string_t)>,
    pub execute_java_script: Option<
        unsafe extern "system" fn(
            self_: *mut cef_frame_t,
            code: *const cef_string_t,
            script_url: *const cef_string_t,
            start_line: c_int,
        ),
    >,
    pub is_main: Option<unsafe extern "system" fn(self_: *mut cef_frame_t) -> c_int>,
    pub is_focused: Option<unsafe extern "system" fn(self_: *mut cef_frame_t) -> c_int>,
    pub get_name:
        Option<unsafe extern "system" fn(self_: *mut cef_frame_t) -> cef_string_userfree_t>,
    pub get_identifier:
        Option<unsafe extern "system" fn(self_: *mut cef_frame_t) -> cef_string_userfree_t>,
    pub get_parent:
        Option<unsafe extern "system" fn(self_: *mut cef_frame_t) -> *mut cef_frame_t>,
    pub get_url:
        Option<unsafe extern "system" fn(self_: *mut cef_frame_t) -> cef_string_userfree_t>,
    pub get_browser:
        Option<unsafe extern "system" fn(self_: *mut cef_frame_t) -> *mut cef_browser_t>,
    pub get_v8context:
        Option<unsafe extern "system" fn(self_: *mut cef_frame_t) -> *mut cef_v8context_t>,
    pub visit_dom:
        Option<unsafe extern "system" fn(self_: *mut cef_frame_t, visitor: *mut cef_domvisitor_t)>,
    pub create_urlrequest: Option<
        unsafe extern "system" fn(
            self_: *mut cef_frame_t,
            request: *mut cef_request_t,
            client: *mut cef_urlrequest_client_t,
        ) -> *mut cef_urlrequest_t,
    >,
    pub send_process_message: Option<
        unsafe extern "system" fn(
            self_: *mut cef_frame_t,
            target_process: cef_process_id_t,
            message: *mut cef_process_message_t,
        ),
    >,
}

// ---------------------------------------------------------------------------
// include/capi/cef_browser_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_browser_t {
    pub base: cef_base_ref_counted_t,
    pub is_valid: Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> c_int>,
    pub get_host:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> *mut cef_browser_host_t>,
    pub can_go_back: Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> c_int>,
    pub go_back: Option<unsafe extern "system" fn(self_: *mut cef_browser_t)>,
    pub can_go_forward: Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> c_int>,
    pub go_forward: Option<unsafe extern "system" fn(self_: *mut cef_browser_t)>,
    pub is_loading: Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> c_int>,
    pub reload: Option<unsafe extern "system" fn(self_: *mut cef_browser_t)>,
    pub reload_ignore_cache: Option<unsafe extern "system" fn(self_: *mut cef_browser_t)>,
    pub stop_load: Option<unsafe extern "system" fn(self_: *mut cef_browser_t)>,
    pub get_identifier: Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> c_int>,
    pub is_same: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_t, that: *mut cef_browser_t) -> c_int,
    >,
    pub is_popup: Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> c_int>,
    pub has_document: Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> c_int>,
    pub get_main_frame:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> *mut cef_frame_t>,
    pub get_focused_frame:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> *mut cef_frame_t>,
    pub get_frame_by_identifier: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_t,
            identifier: *const cef_string_t,
        ) -> *mut cef_frame_t,
    >,
    pub get_frame_by_name: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_t,
            name: *const cef_string_t,
        ) -> *mut cef_frame_t,
    >,
    pub get_frame_count: Option<unsafe extern "system" fn(self_: *mut cef_browser_t) -> usize>,
    pub get_frame_identifiers: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_t, identifiers: cef_string_list_t),
    >,
    pub get_frame_names:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_t, names: cef_string_list_t)>,
}

#[repr(C)]
pub struct cef_browser_host_t {
    pub base: cef_base_ref_counted_t,
    pub get_browser:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> *mut cef_browser_t>,
    pub close_browser:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t, force_close: c_int)>,
    pub try_close_browser:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub is_ready_to_be_closed:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub set_focus: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t, focus: c_int)>,
    pub get_window_handle:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> cef_window_handle_t>,
    pub get_opener_window_handle:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> cef_window_handle_t>,
    pub get_opener_identifier:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub has_view: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub get_client:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> *mut cef_client_t>,
    pub get_request_context: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> *mut cef_request_context_t,
    >,
    pub can_zoom: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            command: cef_zoom_command_t,
        ) -> c_int,
    >,
    pub zoom: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, command: cef_zoom_command_t),
    >,
    pub get_default_zoom_level:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> f64>,
    pub get_zoom_level: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> f64>,
    pub set_zoom_level:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t, zoomLevel: f64)>,
    pub run_file_dialog: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            mode: cef_file_dialog_mode_t,
            title: *const cef_string_t,
            default_file_path: *const cef_string_t,
            accept_filters: cef_string_list_t,
            callback: *mut cef_run_file_dialog_callback_t,
        ),
    >,
    pub start_download:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t, url: *const cef_string_t)>,
    pub download_image: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            image_url: *const cef_string_t,
            is_favicon: c_int,
            max_image_size: u32,
            bypass_cache: c_int,
            callback: *mut cef_download_image_callback_t,
        ),
    >,
    pub print: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub print_to_pdf: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            path: *const cef_string_t,
            settings: *const cef_pdf_print_settings_t,
            callback: *mut cef_pdf_print_callback_t,
        ),
    >,
    pub find: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            searchText: *const cef_string_t,
            forward: c_int,
            matchCase: c_int,
            findNext: c_int,
        ),
    >,
    pub stop_finding:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t, clearSelection: c_int)>,
    pub show_dev_tools: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            windowInfo: *const cef_window_info_t,
            client: *mut cef_client_t,
            settings: *const cef_browser_settings_t,
            inspect_element_at: *const cef_point_t,
        ),
    >,
    pub close_dev_tools: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub has_dev_tools: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub send_dev_tools_message: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            message: *const c_void,
            message_size: usize,
        ) -> c_int,
    >,
    pub execute_dev_tools_method: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            message_id: c_int,
            method: *const cef_string_t,
            params: *mut cef_dictionary_value_t,
        ) -> c_int,
    >,
    pub get_navigation_entries: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            visitor: *mut cef_navigation_entry_visitor_t,
            current_only: c_int,
        ),
    >,
    pub replace_misspelling: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, word: *const cef_string_t),
    >,
    pub add_word_to_dictionary: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, word: *const cef_string_t),
    >,
    pub is_window_rendering_disabled:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub was_resized: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub was_hidden:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t, hidden: c_int)>,
    pub notify_screen_info_changed:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub invalidate: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            element_type: cef_paint_element_type_t,
        ),
    >,
    pub send_external_begin_frame:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub send_key_event: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, event: *const cef_key_event_t),
    >,
    pub send_mouse_click_event: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            event: *const cef_mouse_event_t,
            type_: cef_mouse_button_type_t,
            mouseUp: c_int,
            clickCount: c_int,
        ),
    >,
    pub send_mouse_move_event: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            event: *const cef_mouse_event_t,
            mouseLeave: c_int,
        ),
    >,
    pub send_mouse_wheel_event: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            event: *const cef_mouse_event_t,
            deltaX: c_int,
            deltaY: c_int,
        ),
    >,
    pub send_touch_event: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, event: *const cef_touch_event_t),
    >,
    pub send_capture_lost_event: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub notify_move_or_resize_started:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub get_windowless_frame_rate:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub set_windowless_frame_rate:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t, frame_rate: c_int)>,
    pub ime_set_composition: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            text: *const cef_string_t,
            underlinesCount: usize,
            underlines: *const cef_composition_underline_t,
            replacement_range: *const cef_range_t,
            selection_range: *const cef_range_t,
        ),
    >,
    pub ime_commit_text: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            text: *const cef_string_t,
            replacement_range: *const cef_range_t,
            relative_cursor_pos: c_int,
        ),
    >,
    pub ime_finish_composing_text: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, keep_selection: c_int),
    >,
    pub ime_cancel_composition: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub drag_target_drag_enter: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            drag_data: *mut cef_drag_data_t,
            event: *const cef_mouse_event_t,
            allowed_ops: c_int,
        ),
    >,
    pub drag_target_drag_over: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            event: *const cef_mouse_event_t,
            allowed_ops: c_int,
        ),
    >,
    pub drag_target_drag_leave: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub drag_target_drop: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, event: *const cef_mouse_event_t),
    >,
    pub drag_source_ended_at: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, x: c_int, y: c_int, op: c_int),
    >,
    pub drag_source_system_drag_ended:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t)>,
    pub get_visible_navigation_entry: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> *mut c_void,
    >,
    pub set_accessibility_state: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, accessibility_state: cef_state_t),
    >,
    pub set_auto_resize_enabled: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            enabled: c_int,
            min_size: *const cef_size_t,
            max_size: *const cef_size_t,
        ),
    >,
    pub set_audio_muted:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t, mute: c_int)>,
    pub is_audio_muted: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub is_fullscreen: Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub exit_fullscreen:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t, will_cause_resize: c_int)>,
    pub can_execute_chrome_command: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t, command_id: c_int) -> c_int,
    >,
    pub execute_chrome_command: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_host_t,
            command_id: c_int,
            disposition: cef_window_open_disposition_t,
        ),
    >,
    pub is_render_process_unresponsive:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> c_int>,
    pub get_runtime_style: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_host_t) -> cef_runtime_style_t,
    >,
}

// ---------------------------------------------------------------------------
// include/capi/cef_life_span_handler_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_life_span_handler_t {
    pub base: cef_base_ref_counted_t,
    pub on_before_popup: Option<
        unsafe extern "system" fn(
            self_: *mut cef_life_span_handler_t,
            browser: *mut cef_browser_t,
            frame: *mut cef_frame_t,
            popup_id: c_int,
            target_url: *const cef_string_t,
            target_frame_name: *const cef_string_t,
            target_disposition: cef_window_open_disposition_t,
            user_gesture: c_int,
            popupFeatures: *const cef_popup_features_t,
            windowInfo: *mut cef_window_info_t,
            client: *mut *mut cef_client_t,
            settings: *mut cef_browser_settings_t,
            extra_info: *mut *mut cef_dictionary_value_t,
            no_javascript_access: *mut c_int,
        ) -> c_int,
    >,
    pub on_before_dev_tools_popup: Option<
        unsafe extern "system" fn(
            self_: *mut cef_life_span_handler_t,
            browser: *mut cef_browser_t,
            windowInfo: *mut cef_window_info_t,
            client: *mut *mut cef_client_t,
            settings: *mut cef_browser_settings_t,
            extra_info: *mut *mut cef_dictionary_value_t,
            use_default_window: *mut c_int,
        ),
    >,
    pub on_after_created: Option<
        unsafe extern "system" fn(self_: *mut cef_life_span_handler_t, browser: *mut cef_browser_t),
    >,
    pub do_close: Option<
        unsafe extern "system" fn(
            self_: *mut cef_life_span_handler_t,
            browser: *mut cef_browser_t,
        ) -> c_int,
    >,
    pub on_before_close: Option<
        unsafe extern "system" fn(self_: *mut cef_life_span_handler_t, browser: *mut cef_browser_t),
    >,
}

// ---------------------------------------------------------------------------
// include/capi/cef_display_handler_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_display_handler_t {
    pub base: cef_base_ref_counted_t,
    pub on_address_change: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            frame: *mut cef_frame_t,
            url: *const cef_string_t,
        ),
    >,
    pub on_title_change: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            title: *const cef_string_t,
        ),
    >,
    pub on_favicon_urlchange: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            icon_urls: cef_string_list_t,
        ),
    >,
    pub on_fullscreen_mode_change: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            fullscreen: c_int,
        ),
    >,
    pub on_tooltip: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            text: *mut cef_string_t,
        ) -> c_int,
    >,
    pub on_status_message: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            value: *const cef_string_t,
        ),
    >,
    pub on_console_message: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            level: cef_log_severity_t,
            message: *const cef_string_t,
            source: *const cef_string_t,
            line: c_int,
        ) -> c_int,
    >,
    pub on_auto_resize: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            new_size: *const cef_size_t,
        ) -> c_int,
    >,
    pub on_loading_progress_change: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            progress: f64,
        ),
    >,
    pub on_cursor_change: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            cursor: cef_cursor_handle_t,
            type_: cef_cursor_type_t,
            custom_cursor_info: *const cef_cursor_info_t,
        ) -> c_int,
    >,
    pub on_media_access_change: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            has_video_access: c_int,
            has_audio_access: c_int,
        ),
    >,
    pub on_contents_bounds_change: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            new_bounds: *const cef_rect_t,
        ) -> c_int,
    >,
    pub get_root_window_screen_rect: Option<
        unsafe extern "system" fn(
            self_: *mut cef_display_handler_t,
            browser: *mut cef_browser_t,
            rect: *mut cef_rect_t,
        ) -> c_int,
    >,
}

// ---------------------------------------------------------------------------
// include/capi/cef_load_handler_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_load_handler_t {
    pub base: cef_base_ref_counted_t,
    pub on_loading_state_change: Option<
        unsafe extern "system" fn(
            self_: *mut cef_load_handler_t,
            browser: *mut cef_browser_t,
            isLoading: c_int,
            canGoBack: c_int,
            canGoForward: c_int,
        ),
    >,
    pub on_load_start: Option<
        unsafe extern "system" fn(
            self_: *mut cef_load_handler_t,
            browser: *mut cef_browser_t,
            frame: *mut cef_frame_t,
            transition_type: cef_transition_type_t,
        ),
    >,
    pub on_load_end: Option<
        unsafe extern "system" fn(
            self_: *mut cef_load_handler_t,
            browser: *mut cef_browser_t,
            frame: *mut cef_frame_t,
            httpStatusCode: c_int,
        ),
    >,
    pub on_load_error: Option<
        unsafe extern "system" fn(
            self_: *mut cef_load_handler_t,
            browser: *mut cef_browser_t,
            frame: *mut cef_frame_t,
            errorCode: cef_errorcode_t,
            errorText: *const cef_string_t,
            failedUrl: *const cef_string_t,
        ),
    >,
}

// ---------------------------------------------------------------------------
// include/capi/cef_client_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_client_t {
    pub base: cef_base_ref_counted_t,
    pub get_audio_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_audio_handler_t>,
    pub get_command_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_command_handler_t>,
    pub get_context_menu_handler: Option<
        unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_context_menu_handler_t,
    >,
    pub get_dialog_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_dialog_handler_t>,
    pub get_display_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_display_handler_t>,
    pub get_download_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_download_handler_t>,
    pub get_drag_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_drag_handler_t>,
    pub get_find_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_find_handler_t>,
    pub get_focus_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_focus_handler_t>,
    pub get_frame_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_frame_handler_t>,
    pub get_permission_handler: Option<
        unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_permission_handler_t,
    >,
    pub get_jsdialog_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_jsdialog_handler_t>,
    pub get_keyboard_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_keyboard_handler_t>,
    pub get_life_span_handler: Option<
        unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_life_span_handler_t,
    >,
    pub get_load_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_load_handler_t>,
    pub get_print_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_print_handler_t>,
    pub get_render_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_render_handler_t>,
    pub get_request_handler:
        Option<unsafe extern "system" fn(self_: *mut cef_client_t) -> *mut cef_request_handler_t>,
    pub on_process_message_received: Option<
        unsafe extern "system" fn(
            self_: *mut cef_client_t,
            browser: *mut cef_browser_t,
            frame: *mut cef_frame_t,
            source_process: cef_process_id_t,
            message: *mut cef_process_message_t,
        ) -> c_int,
    >,
}

// ---------------------------------------------------------------------------
// include/capi/cef_browser_process_handler_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_browser_process_handler_t {
    pub base: cef_base_ref_counted_t,
    pub on_register_custom_preferences: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_process_handler_t,
            type_: cef_preferences_type_t,
            registrar: *mut cef_preference_registrar_t,
        ),
    >,
    pub on_context_initialized:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_process_handler_t)>,
    pub on_before_child_process_launch: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_process_handler_t,
            command_line: *mut cef_command_line_t,
        ),
    >,
    pub on_already_running_app_relaunch: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_process_handler_t,
            command_line: *mut cef_command_line_t,
            current_directory: *const cef_string_t,
        ) -> c_int,
    >,
    pub on_schedule_message_pump_work: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_process_handler_t, delay_ms: i64),
    >,
    pub get_default_client: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_process_handler_t) -> *mut cef_client_t,
    >,
    pub get_default_request_context_handler: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_process_handler_t,
        ) -> *mut cef_request_context_handler_t,
    >,
}

// ---------------------------------------------------------------------------
// include/capi/cef_app_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_app_t {
    pub base: cef_base_ref_counted_t,
    pub on_before_command_line_processing: Option<
        unsafe extern "system" fn(
            self_: *mut cef_app_t,
            process_type: *const cef_string_t,
            command_line: *mut cef_command_line_t,
        ),
    >,
    pub on_register_custom_schemes: Option<
        unsafe extern "system" fn(self_: *mut cef_app_t, registrar: *mut cef_scheme_registrar_t),
    >,
    pub get_resource_bundle_handler: Option<
        unsafe extern "system" fn(self_: *mut cef_app_t) -> *mut cef_resource_bundle_handler_t,
    >,
    pub get_browser_process_handler: Option<
        unsafe extern "system" fn(self_: *mut cef_app_t) -> *mut cef_browser_process_handler_t,
    >,
    pub get_render_process_handler: Option<
        unsafe extern "system" fn(self_: *mut cef_app_t) -> *mut cef_render_process_handler_t,
    >,
}

// ---------------------------------------------------------------------------
// include/capi/views/cef_view_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_view_t {
    pub base: cef_base_ref_counted_t,
    pub as_browser_view:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> *mut cef_browser_view_t>,
    pub as_button: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> *mut cef_button_t>,
    pub as_panel: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> *mut cef_panel_t>,
    pub as_scroll_view:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> *mut cef_scroll_view_t>,
    pub as_textfield:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> *mut cef_textfield_t>,
    pub get_type_string:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_string_userfree_t>,
    pub to_string: Option<
        unsafe extern "system" fn(self_: *mut cef_view_t, include_children: c_int)
            -> cef_string_userfree_t,
    >,
    pub is_valid: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub is_attached: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub is_same:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, that: *mut cef_view_t) -> c_int>,
    pub get_delegate:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> *mut cef_view_delegate_t>,
    pub get_window:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> *mut cef_window_t>,
    pub get_id: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub set_id: Option<unsafe extern "system" fn(self_: *mut cef_view_t, id: c_int)>,
    pub get_group_id: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub set_group_id: Option<unsafe extern "system" fn(self_: *mut cef_view_t, group_id: c_int)>,
    pub get_parent_view:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> *mut cef_view_t>,
    pub get_view_for_id:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, id: c_int) -> *mut cef_view_t>,
    pub set_bounds:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, bounds: *const cef_rect_t)>,
    pub get_bounds: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_rect_t>,
    pub get_bounds_in_screen:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_rect_t>,
    pub set_size:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, size: *const cef_size_t)>,
    pub get_size: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_size_t>,
    pub set_position:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, position: *const cef_point_t)>,
    pub get_position: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_point_t>,
    pub set_insets:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, insets: *const cef_insets_t)>,
    pub get_insets: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_insets_t>,
    pub get_preferred_size:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_size_t>,
    pub size_to_preferred_size: Option<unsafe extern "system" fn(self_: *mut cef_view_t)>,
    pub get_minimum_size: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_size_t>,
    pub get_maximum_size: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_size_t>,
    pub get_height_for_width:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, width: c_int) -> c_int>,
    pub invalidate_layout: Option<unsafe extern "system" fn(self_: *mut cef_view_t)>,
    pub set_visible: Option<unsafe extern "system" fn(self_: *mut cef_view_t, visible: c_int)>,
    pub is_visible: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub is_drawn: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub set_enabled: Option<unsafe extern "system" fn(self_: *mut cef_view_t, enabled: c_int)>,
    pub is_enabled: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub set_focusable:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, focusable: c_int)>,
    pub is_focusable: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub is_accessibility_focusable:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub has_focus: Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> c_int>,
    pub request_focus: Option<unsafe extern "system" fn(self_: *mut cef_view_t)>,
    pub set_background_color:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, color: cef_color_t)>,
    pub get_background_color:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t) -> cef_color_t>,
    pub get_theme_color:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, color_id: c_int) -> cef_color_t>,
    pub convert_point_to_screen:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, point: *mut cef_point_t) -> c_int>,
    pub convert_point_from_screen:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, point: *mut cef_point_t) -> c_int>,
    pub convert_point_to_window:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, point: *mut cef_point_t) -> c_int>,
    pub convert_point_from_window:
        Option<unsafe extern "system" fn(self_: *mut cef_view_t, point: *mut cef_point_t) -> c_int>,
    pub convert_point_to_view: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_t,
            view: *mut cef_view_t,
            point: *mut cef_point_t,
        ) -> c_int,
    >,
    pub convert_point_from_view: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_t,
            view: *mut cef_view_t,
            point: *mut cef_point_t,
        ) -> c_int,
    >,
}

// ---------------------------------------------------------------------------
// include/capi/views/cef_panel_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_panel_t {
    pub base: cef_view_t,
    pub as_window:
        Option<unsafe extern "system" fn(self_: *mut cef_panel_t) -> *mut cef_window_t>,
    pub set_to_fill_layout:
        Option<unsafe extern "system" fn(self_: *mut cef_panel_t) -> *mut cef_fill_layout_t>,
    pub set_to_box_layout: Option<
        unsafe extern "system" fn(
            self_: *mut cef_panel_t,
            settings: *const cef_box_layout_settings_t,
        ) -> *mut cef_box_layout_t,
    >,
    pub get_layout:
        Option<unsafe extern "system" fn(self_: *mut cef_panel_t) -> *mut cef_layout_t>,
    pub layout: Option<unsafe extern "system" fn(self_: *mut cef_panel_t)>,
    pub add_child_view:
        Option<unsafe extern "system" fn(self_: *mut cef_panel_t, view: *mut cef_view_t)>,
    pub add_child_view_at: Option<
        unsafe extern "system" fn(self_: *mut cef_panel_t, view: *mut cef_view_t, index: c_int),
    >,
    pub reorder_child_view: Option<
        unsafe extern "system" fn(self_: *mut cef_panel_t, view: *mut cef_view_t, index: c_int),
    >,
    pub remove_child_view:
        Option<unsafe extern "system" fn(self_: *mut cef_panel_t, view: *mut cef_view_t)>,
    pub remove_all_child_views: Option<unsafe extern "system" fn(self_: *mut cef_panel_t)>,
    pub get_child_view_count: Option<unsafe extern "system" fn(self_: *mut cef_panel_t) -> usize>,
    pub get_child_view_at:
        Option<unsafe extern "system" fn(self_: *mut cef_panel_t, index: c_int) -> *mut cef_view_t>,
}

// ---------------------------------------------------------------------------
// include/capi/views/cef_window_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_window_t {
    pub base: cef_panel_t,
    pub show: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub show_as_browser_modal_dialog: Option<
        unsafe extern "system" fn(self_: *mut cef_window_t, browser_view: *mut cef_browser_view_t),
    >,
    pub hide: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub center_window:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t, size: *const cef_size_t)>,
    pub close: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub is_closed: Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> c_int>,
    pub activate: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub deactivate: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub is_active: Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> c_int>,
    pub bring_to_top: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub set_always_on_top:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t, on_top: c_int)>,
    pub is_always_on_top: Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> c_int>,
    pub maximize: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub minimize: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub restore: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub set_fullscreen:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t, fullscreen: c_int)>,
    pub is_maximized: Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> c_int>,
    pub is_minimized: Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> c_int>,
    pub is_fullscreen: Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> c_int>,
    pub get_focused_view:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> *mut cef_view_t>,
    pub set_title:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t, title: *const cef_string_t)>,
    pub get_title:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> cef_string_userfree_t>,
    pub set_window_icon:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t, image: *mut cef_image_t)>,
    pub get_window_icon:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> *mut cef_image_t>,
    pub set_window_app_icon:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t, image: *mut cef_image_t)>,
    pub get_window_app_icon:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> *mut cef_image_t>,
    pub add_overlay_view: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_t,
            view: *mut cef_view_t,
            docking_mode: cef_docking_mode_t,
            can_activate: c_int,
        ) -> *mut cef_overlay_controller_t,
    >,
    pub show_menu: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_t,
            menu_model: *mut cef_menu_model_t,
            screen_point: *const cef_point_t,
            anchor_position: cef_menu_anchor_position_t,
        ),
    >,
    pub cancel_menu: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub get_display:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> *mut cef_display_t>,
    pub get_client_area_bounds_in_screen:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> cef_rect_t>,
    pub set_draggable_regions: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_t,
            regionsCount: usize,
            regions: *const cef_draggable_region_t,
        ),
    >,
    pub get_window_handle:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> cef_window_handle_t>,
    pub send_key_press: Option<
        unsafe extern "system" fn(self_: *mut cef_window_t, key_code: c_int, event_flags: u32),
    >,
    pub send_mouse_move: Option<
        unsafe extern "system" fn(self_: *mut cef_window_t, screen_x: c_int, screen_y: c_int),
    >,
    pub send_mouse_events: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_t,
            button: cef_mouse_button_type_t,
            mouse_down: c_int,
            mouse_up: c_int,
        ),
    >,
    pub set_accelerator: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_t,
            command_id: c_int,
            key_code: c_int,
            shift_pressed: c_int,
            ctrl_pressed: c_int,
            alt_pressed: c_int,
            high_priority: c_int,
        ),
    >,
    pub remove_accelerator:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t, command_id: c_int)>,
    pub remove_all_accelerators: Option<unsafe extern "system" fn(self_: *mut cef_window_t)>,
    pub set_theme_mode:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t, mode: cef_color_mode_t)>,
    pub get_runtime_style:
        Option<unsafe extern "system" fn(self_: *mut cef_window_t) -> cef_runtime_style_t>,
}

// ---------------------------------------------------------------------------
// include/capi/views/cef_browser_view_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_browser_view_t {
    pub base: cef_view_t,
    pub get_browser:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_view_t) -> *mut cef_browser_t>,
    pub get_chrome_toolbar:
        Option<unsafe extern "system" fn(self_: *mut cef_browser_view_t) -> *mut cef_view_t>,
    pub set_prefer_accelerators: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_view_t, prefer_accelerators: c_int),
    >,
    pub get_runtime_style: Option<
        unsafe extern "system" fn(self_: *mut cef_browser_view_t) -> cef_runtime_style_t,
    >,
}

// ---------------------------------------------------------------------------
// include/capi/views/cef_view_delegate_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_view_delegate_t {
    pub base: cef_base_ref_counted_t,
    pub get_preferred_size: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_delegate_t,
            view: *mut cef_view_t,
        ) -> cef_size_t,
    >,
    pub get_minimum_size: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_delegate_t,
            view: *mut cef_view_t,
        ) -> cef_size_t,
    >,
    pub get_maximum_size: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_delegate_t,
            view: *mut cef_view_t,
        ) -> cef_size_t,
    >,
    pub get_height_for_width: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_delegate_t,
            view: *mut cef_view_t,
            width: c_int,
        ) -> c_int,
    >,
    pub on_parent_view_changed: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_delegate_t,
            view: *mut cef_view_t,
            added: c_int,
            parent: *mut cef_view_t,
        ),
    >,
    pub on_child_view_changed: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_delegate_t,
            view: *mut cef_view_t,
            added: c_int,
            child: *mut cef_view_t,
        ),
    >,
    pub on_window_changed: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_delegate_t,
            view: *mut cef_view_t,
            added: c_int,
        ),
    >,
    pub on_layout_changed: Option<
        unsafe extern "system" fn(
            self_: *mut cef_view_delegate_t,
            view: *mut cef_view_t,
            new_bounds: *const cef_rect_t,
        ),
    >,
    pub on_focus:
        Option<unsafe extern "system" fn(self_: *mut cef_view_delegate_t, view: *mut cef_view_t)>,
    pub on_blur:
        Option<unsafe extern "system" fn(self_: *mut cef_view_delegate_t, view: *mut cef_view_t)>,
    pub on_theme_changed:
        Option<unsafe extern "system" fn(self_: *mut cef_view_delegate_t, view: *mut cef_view_t)>,
}

// ---------------------------------------------------------------------------
// include/capi/views/cef_panel_delegate_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_panel_delegate_t {
    pub base: cef_view_delegate_t,
}

// ---------------------------------------------------------------------------
// include/capi/views/cef_browser_view_delegate_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_browser_view_delegate_t {
    pub base: cef_view_delegate_t,
    pub on_browser_created: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_view_delegate_t,
            browser_view: *mut cef_browser_view_t,
            browser: *mut cef_browser_t,
        ),
    >,
    pub on_browser_destroyed: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_view_delegate_t,
            browser_view: *mut cef_browser_view_t,
            browser: *mut cef_browser_t,
        ),
    >,
    pub get_delegate_for_popup_browser_view: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_view_delegate_t,
            browser_view: *mut cef_browser_view_t,
            settings: *const cef_browser_settings_t,
            client: *mut cef_client_t,
            is_devtools: c_int,
        ) -> *mut cef_browser_view_delegate_t,
    >,
    pub on_popup_browser_view_created: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_view_delegate_t,
            browser_view: *mut cef_browser_view_t,
            popup_browser_view: *mut cef_browser_view_t,
            is_devtools: c_int,
        ) -> c_int,
    >,
    pub get_chrome_toolbar_type: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_view_delegate_t,
            browser_view: *mut cef_browser_view_t,
        ) -> cef_chrome_toolbar_type_t,
    >,
    pub use_frameless_window_for_picture_in_picture: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_view_delegate_t,
            browser_view: *mut cef_browser_view_t,
        ) -> c_int,
    >,
    pub on_gesture_command: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_view_delegate_t,
            browser_view: *mut cef_browser_view_t,
            gesture_command: cef_gesture_command_t,
        ) -> c_int,
    >,
    pub get_browser_runtime_style: Option<
        unsafe extern "system" fn(
            self_: *mut cef_browser_view_delegate_t,
        ) -> cef_runtime_style_t,
    >,
}

// ---------------------------------------------------------------------------
// include/capi/views/cef_window_delegate_capi.h
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct cef_window_delegate_t {
    pub base: cef_panel_delegate_t,
    pub on_window_created: Option<
        unsafe extern "system" fn(self_: *mut cef_window_delegate_t, window: *mut cef_window_t),
    >,
    pub on_window_closing: Option<
        unsafe extern "system" fn(self_: *mut cef_window_delegate_t, window: *mut cef_window_t),
    >,
    pub on_window_destroyed: Option<
        unsafe extern "system" fn(self_: *mut cef_window_delegate_t, window: *mut cef_window_t),
    >,
    pub on_window_activation_changed: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
            active: c_int,
        ),
    >,
    pub on_window_bounds_changed: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
            new_bounds: *const cef_rect_t,
        ),
    >,
    pub on_window_fullscreen_transition: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
            is_completed: c_int,
        ),
    >,
    pub get_parent_window: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
            is_menu: *mut c_int,
            can_activate_menu: *mut c_int,
        ) -> *mut cef_window_t,
    >,
    pub is_window_modal_dialog: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> c_int,
    >,
    pub get_initial_bounds: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> cef_rect_t,
    >,
    pub get_initial_show_state: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> cef_show_state_t,
    >,
    pub is_frameless: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> c_int,
    >,
    pub with_standard_window_buttons: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> c_int,
    >,
    pub get_titlebar_height: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
            titlebar_height: *mut f32,
        ) -> c_int,
    >,
    pub accepts_first_mouse: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> cef_state_t,
    >,
    pub can_resize: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> c_int,
    >,
    pub can_maximize: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> c_int,
    >,
    pub can_minimize: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> c_int,
    >,
    pub can_close: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
        ) -> c_int,
    >,
    pub on_accelerator: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
            command_id: c_int,
        ) -> c_int,
    >,
    pub on_key_event: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
            event: *const cef_key_event_t,
        ) -> c_int,
    >,
    pub on_theme_colors_changed: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
            chrome_theme: c_int,
        ),
    >,
    pub get_window_runtime_style: Option<
        unsafe extern "system" fn(self_: *mut cef_window_delegate_t) -> cef_runtime_style_t,
    >,
    pub get_linux_window_properties: Option<
        unsafe extern "system" fn(
            self_: *mut cef_window_delegate_t,
            window: *mut cef_window_t,
            properties: *mut cef_linux_window_properties_t,
        ) -> c_int,
    >,
}
