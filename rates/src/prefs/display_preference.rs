use serde::Deserialize;
use serde::Serialize;

use crate::format::NumberStyle;

/// How amounts are rendered for the user.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DisplayPreference {
    /// Language tag the number style is derived from, e.g. `fr-DZ`.
    locale: String,
}

impl DisplayPreference {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// Creates a DisplayPreference from environment variables.
    ///
    /// # Environment Variables
    /// - `DINAR_DESK_LOCALE`: language tag such as "fr-DZ" or "en-US".
    /// - `LANG`: consulted when `DINAR_DESK_LOCALE` is unset.
    ///
    /// Falls back to "en" when neither is set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let locale = lookup("DINAR_DESK_LOCALE")
            .or_else(|| lookup("LANG"))
            .filter(|tag| !tag.trim().is_empty())
            .unwrap_or_else(|| "en".to_string());
        Self { locale }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn number_style(&self) -> NumberStyle {
        NumberStyle::from_locale_tag(&self.locale)
    }
}

impl Default for DisplayPreference {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn explicit_locale_wins_over_lang() {
        let pref = DisplayPreference::from_lookup(|name| match name {
            "DINAR_DESK_LOCALE" => Some("fr-DZ".to_string()),
            "LANG" => Some("en_US.UTF-8".to_string()),
            _ => None,
        });
        assert_eq!(pref.locale(), "fr-DZ");
        assert_eq!(pref.number_style(), NumberStyle::FRENCH);
    }

    #[test]
    fn lang_is_the_fallback() {
        let pref = DisplayPreference::from_lookup(|name| {
            (name == "LANG").then(|| "de_DE.UTF-8".to_string())
        });
        assert_eq!(pref.number_style(), NumberStyle::CONTINENTAL);
    }

    #[test]
    fn defaults_to_english() {
        let pref = DisplayPreference::from_lookup(|_| None);
        assert_eq!(pref.locale(), "en");
        assert_eq!(pref.number_style(), NumberStyle::ENGLISH);
    }
}
