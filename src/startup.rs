//! Launch configuration derived from startup switches.
//!
//! The engine's global command line only exists once the engine is
//! initialized, so the derivation logic is written against a small trait
//! that both the engine wrapper and plain argv scanning implement.

use crate::bindings::capi::{
    CEF_RUNTIME_STYLE_ALLOY, CEF_RUNTIME_STYLE_DEFAULT, CEF_SHOW_STATE_HIDDEN,
    CEF_SHOW_STATE_MAXIMIZED, CEF_SHOW_STATE_MINIMIZED, CEF_SHOW_STATE_NORMAL,
    cef_runtime_style_t, cef_show_state_t,
};
use crate::constants::DEFAULT_URL;

/// Switch selecting a raw platform window over the Views framework.
pub const SWITCH_USE_NATIVE: &str = "use-native";
/// Switch selecting the Alloy runtime style over the engine default.
pub const SWITCH_USE_ALLOY_STYLE: &str = "use-alloy-style";
/// Switch carrying the startup URL.
pub const SWITCH_URL: &str = "url";
/// Switch carrying the initial window show state.
pub const SWITCH_INITIAL_SHOW_STATE: &str = "initial-show-state";

/// Switch the engine appends to its sub-process command lines.
const SWITCH_PROCESS_TYPE: &str = "type";

/// Where startup switches come from.
pub trait SwitchSource {
    /// Whether the switch is present at all, valued or not.
    fn has_switch(&self, name: &str) -> bool;

    /// The switch value, when present and non-empty.
    fn switch_value(&self, name: &str) -> Option<String>;
}

/// How the first browser window is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// The engine's Views framework owns the window.
    #[default]
    ViewsManaged,
    /// The engine renders into a raw platform window handle.
    NativeHandle,
}

/// Which UI runtime the engine applies to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeStyle {
    /// Engine default (Chrome style).
    #[default]
    Default,
    /// Alloy style: no browser chrome, the host draws everything.
    Alloy,
}

impl RuntimeStyle {
    pub fn to_raw(self) -> cef_runtime_style_t {
        match self {
            RuntimeStyle::Default => CEF_RUNTIME_STYLE_DEFAULT,
            RuntimeStyle::Alloy => CEF_RUNTIME_STYLE_ALLOY,
        }
    }
}

/// Initial window presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    /// Created but not shown; the window stays hidden until something else
    /// shows it.
    Hidden,
}

impl ShowState {
    /// Maps a switch value to a state. Unknown names fall back to `Normal`;
    /// matching is case-sensitive like the engine's own switch handling.
    pub fn from_name(name: &str) -> ShowState {
        match name {
            "minimized" => ShowState::Minimized,
            "maximized" => ShowState::Maximized,
            "hidden" => ShowState::Hidden,
            _ => ShowState::Normal,
        }
    }

    pub fn to_raw(self) -> cef_show_state_t {
        match self {
            ShowState::Normal => CEF_SHOW_STATE_NORMAL,
            ShowState::Minimized => CEF_SHOW_STATE_MINIMIZED,
            ShowState::Maximized => CEF_SHOW_STATE_MAXIMIZED,
            ShowState::Hidden => CEF_SHOW_STATE_HIDDEN,
        }
    }

    /// Whether the window should be shown right after creation.
    pub fn shows_window(self) -> bool {
        self != ShowState::Hidden
    }
}

/// Everything the first browser window needs, derived from switches once.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    pub window_mode: WindowMode,
    pub runtime_style: RuntimeStyle,
    pub url: String,
    pub show_state: ShowState,
}

impl Default for LaunchConfig {
    fn default() -> LaunchConfig {
        LaunchConfig {
            window_mode: WindowMode::default(),
            runtime_style: RuntimeStyle::default(),
            url: DEFAULT_URL.to_string(),
            show_state: ShowState::default(),
        }
    }
}

impl LaunchConfig {
    /// Derives the launch configuration from whatever switch source is at
    /// hand. Absent or empty switches keep their defaults.
    pub fn from_switches<S: SwitchSource + ?Sized>(switches: &S) -> LaunchConfig {
        let window_mode = if switches.has_switch(SWITCH_USE_NATIVE) {
            WindowMode::NativeHandle
        } else {
            WindowMode::ViewsManaged
        };
        let runtime_style = if switches.has_switch(SWITCH_USE_ALLOY_STYLE) {
            RuntimeStyle::Alloy
        } else {
            RuntimeStyle::Default
        };
        let url = switches
            .switch_value(SWITCH_URL)
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let show_state = switches
            .switch_value(SWITCH_INITIAL_SHOW_STATE)
            .map(|name| ShowState::from_name(&name))
            .unwrap_or_default();
        LaunchConfig {
            window_mode,
            runtime_style,
            url,
            show_state,
        }
    }
}

/// Switch lookup over plain process arguments, for use before the engine is
/// initialized. Follows the engine's switch syntax: `--name`, `--name=value`
/// and single-dash variants; a bare `--` ends switch parsing; the first
/// argument is the program name; later occurrences win.
#[derive(Debug, Default)]
pub struct ArgvSwitches {
    switches: Vec<(String, String)>,
}

impl ArgvSwitches {
    pub fn from_args<I, A>(args: I) -> ArgvSwitches
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        let mut switches = Vec::new();
        for arg in args.into_iter().skip(1) {
            let arg = arg.as_ref();
            if arg == "--" {
                break;
            }
            let name = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
                Some(name) if !name.is_empty() => name,
                _ => continue,
            };
            match name.split_once('=') {
                Some((name, value)) => switches.push((name.to_string(), value.to_string())),
                None => switches.push((name.to_string(), String::new())),
            }
        }
        ArgvSwitches { switches }
    }

    pub fn from_env() -> ArgvSwitches {
        ArgvSwitches::from_args(std::env::args())
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        self.switches
            .iter()
            .rev()
            .find(|(switch, _)| switch == name)
            .map(|(_, value)| value.as_str())
    }
}

impl SwitchSource for ArgvSwitches {
    fn has_switch(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    fn switch_value(&self, name: &str) -> Option<String> {
        self.lookup(name)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }
}

/// The sub-process type from the engine-appended `--type` switch; `None` in
/// the browser process.
pub fn process_type() -> Option<String> {
    ArgvSwitches::from_env().switch_value(SWITCH_PROCESS_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> LaunchConfig {
        let mut argv = vec!["cef-shell"];
        argv.extend_from_slice(args);
        LaunchConfig::from_switches(&ArgvSwitches::from_args(argv))
    }

    #[test]
    fn defaults_when_no_switches_are_given() {
        let config = config(&[]);
        assert_eq!(config.window_mode, WindowMode::ViewsManaged);
        assert_eq!(config.runtime_style, RuntimeStyle::Default);
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.show_state, ShowState::Normal);
    }

    #[test]
    fn use_native_selects_the_platform_window() {
        assert_eq!(
            config(&["--use-native"]).window_mode,
            WindowMode::NativeHandle
        );
    }

    #[test]
    fn alloy_style_follows_switch_presence() {
        assert_eq!(
            config(&["--use-alloy-style"]).runtime_style,
            RuntimeStyle::Alloy
        );
        assert_eq!(config(&[]).runtime_style, RuntimeStyle::Default);
    }

    #[test]
    fn url_switch_overrides_the_default() {
        assert_eq!(
            config(&["--url=https://example.com/a?b=c"]).url,
            "https://example.com/a?b=c"
        );
    }

    #[test]
    fn empty_url_value_falls_back_to_the_default() {
        assert_eq!(config(&["--url="]).url, DEFAULT_URL);
        assert_eq!(config(&["--url"]).url, DEFAULT_URL);
    }

    #[test]
    fn show_state_names_map_to_states() {
        assert_eq!(
            config(&["--initial-show-state=minimized"]).show_state,
            ShowState::Minimized
        );
        assert_eq!(
            config(&["--initial-show-state=maximized"]).show_state,
            ShowState::Maximized
        );
        assert_eq!(
            config(&["--initial-show-state=hidden"]).show_state,
            ShowState::Hidden
        );
    }

    #[test]
    fn unknown_show_state_degrades_to_normal() {
        assert_eq!(
            config(&["--initial-show-state=sideways"]).show_state,
            ShowState::Normal
        );
        assert_eq!(
            config(&["--initial-show-state=Minimized"]).show_state,
            ShowState::Normal
        );
    }

    #[test]
    fn later_switch_occurrences_win() {
        assert_eq!(
            config(&["--url=https://first.test", "--url=https://second.test"]).url,
            "https://second.test"
        );
    }

    #[test]
    fn double_dash_ends_switch_parsing() {
        assert_eq!(config(&["--", "--url=https://ignored.test"]).url, DEFAULT_URL);
    }

    #[test]
    fn non_switch_arguments_are_ignored() {
        let switches = ArgvSwitches::from_args(["cef-shell", "positional", "-", "--use-native"]);
        assert!(switches.has_switch(SWITCH_USE_NATIVE));
        assert!(!switches.has_switch("positional"));
    }

    #[test]
    fn single_dash_switches_parse() {
        let switches = ArgvSwitches::from_args(["cef-shell", "-type=renderer"]);
        assert_eq!(switches.switch_value("type").as_deref(), Some("renderer"));
    }

    #[test]
    fn hidden_is_the_only_state_that_keeps_the_window_unshown() {
        assert!(ShowState::Normal.shows_window());
        assert!(ShowState::Minimized.shows_window());
        assert!(ShowState::Maximized.shows_window());
        assert!(!ShowState::Hidden.shows_window());
    }

    #[test]
    fn show_states_map_to_engine_constants() {
        assert_eq!(ShowState::Normal.to_raw(), CEF_SHOW_STATE_NORMAL);
        assert_eq!(ShowState::Minimized.to_raw(), CEF_SHOW_STATE_MINIMIZED);
        assert_eq!(ShowState::Maximized.to_raw(), CEF_SHOW_STATE_MAXIMIZED);
        assert_eq!(ShowState::Hidden.to_raw(), CEF_SHOW_STATE_HIDDEN);
    }
}
