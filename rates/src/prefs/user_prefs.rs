use std::path::PathBuf;
use std::str::FromStr;

use dioxus_logger::tracing::Level;
use serde::Deserialize;
use serde::Serialize;

use super::display_preference::DisplayPreference;

/// Log verbosity, parsed case-insensitively from `DINAR_DESK_LOG`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Represents all user prefs. Read once at startup.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    display_preference: DisplayPreference,
    /// Directory of the native file store. `None` means the platform data dir.
    data_dir: Option<PathBuf>,
    log_level: LogLevel,
}

impl UserPrefs {
    /// Reads `DINAR_DESK_LOCALE`/`LANG`, `DINAR_DESK_DATA_DIR` and `DINAR_DESK_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("DINAR_DESK_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let log_level = lookup("DINAR_DESK_LOG")
            .and_then(|s| LogLevel::from_str(s.trim()).ok())
            .unwrap_or_default();

        Self {
            display_preference: DisplayPreference::from_lookup(&lookup),
            data_dir,
            log_level,
        }
    }

    pub fn display_preference(&self) -> &DisplayPreference {
        &self.display_preference
    }

    /// Replaces the display locale, e.g. with the browser's language.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.display_preference = DisplayPreference::new(locale);
        self
    }

    pub fn data_dir(&self) -> Option<&PathBuf> {
        self.data_dir.as_ref()
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::format::NumberStyle;

    fn env(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn reads_every_setting() {
        let prefs = UserPrefs::from_lookup(env(&[
            ("DINAR_DESK_LOCALE", "fr-DZ"),
            ("DINAR_DESK_DATA_DIR", "/tmp/dinar"),
            ("DINAR_DESK_LOG", "DEBUG"),
        ]));
        assert_eq!(prefs.display_preference().number_style(), NumberStyle::FRENCH);
        assert_eq!(prefs.data_dir(), Some(&PathBuf::from("/tmp/dinar")));
        assert_eq!(prefs.log_level(), LogLevel::Debug);
    }

    #[rstest]
    #[case(&[("DINAR_DESK_LOG", "verbose")])]
    #[case(&[("DINAR_DESK_LOG", "")])]
    #[case(&[])]
    fn bad_log_level_falls_back_to_info(#[case] vars: &'static [(&'static str, &'static str)]) {
        assert_eq!(UserPrefs::from_lookup(env(vars)).log_level(), LogLevel::Info);
    }

    #[test]
    fn empty_data_dir_means_platform_default() {
        let prefs = UserPrefs::from_lookup(env(&[("DINAR_DESK_DATA_DIR", "  ")]));
        assert_eq!(prefs.data_dir(), None);
    }

    #[test]
    fn browser_locale_overrides() {
        let prefs = UserPrefs::from_lookup(env(&[])).with_locale("de-DE");
        assert_eq!(prefs.display_preference().locale(), "de-DE");
    }

    #[test]
    fn log_levels_map_to_tracing() {
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::default()), Level::INFO);
    }
}
