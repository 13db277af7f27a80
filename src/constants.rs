/// URL opened when no `--url` switch is given.
pub const DEFAULT_URL: &str = "https://www.baidu.com";

/// Preferred width (in pixels) for Views-managed browser windows.
pub const PREFERRED_WINDOW_WIDTH: i32 = 1000;

/// Preferred height (in pixels) for Views-managed browser windows.
pub const PREFERRED_WINDOW_HEIGHT: i32 = 1000;

/// Title given to browsers hosted in a raw platform window.
pub const NATIVE_WINDOW_NAME: &str = "cef-shell";

/// Environment variable naming the directory the engine library lives in.
pub const ENGINE_DIR_ENV: &str = "CEF_SHELL_ENGINE_DIR";

/// Engine library file name on this platform.
#[cfg(windows)]
pub const ENGINE_LIBRARY_NAME: &str = "libcef.dll";

/// Engine library file name on this platform.
#[cfg(target_os = "linux")]
pub const ENGINE_LIBRARY_NAME: &str = "libcef.so";
