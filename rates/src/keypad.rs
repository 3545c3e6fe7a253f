//! The on-screen keypad and the two amount buffers it types into.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadKey {
    Digit(u8),
    Point,
    Backspace,
    Clear,
}

/// Keypad keys in on-screen order, three per row.
pub const KEYPAD_LAYOUT: [KeypadKey; 13] = [
    KeypadKey::Digit(7),
    KeypadKey::Digit(8),
    KeypadKey::Digit(9),
    KeypadKey::Digit(4),
    KeypadKey::Digit(5),
    KeypadKey::Digit(6),
    KeypadKey::Digit(1),
    KeypadKey::Digit(2),
    KeypadKey::Digit(3),
    KeypadKey::Point,
    KeypadKey::Digit(0),
    KeypadKey::Backspace,
    KeypadKey::Clear,
];

impl KeypadKey {
    /// The label printed on the key.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Clear => "C".to_string(),
        }
    }

    /// Maps a hardware keyboard key name (as reported by the browser) to a keypad key.
    pub fn from_keyboard(key: &str) -> Option<Self> {
        match key {
            "." | "," | "Decimal" => Some(Self::Point),
            "Backspace" => Some(Self::Backspace),
            "Escape" | "Delete" | "c" | "C" => Some(Self::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }

    /// Applies this key to a text buffer.
    pub fn apply(&self, buffer: &mut String) {
        match self {
            Self::Digit(d) => {
                let digit = char::from(b'0' + (*d).min(9));
                if buffer == "0" {
                    buffer.clear();
                }
                buffer.push(digit);
            }
            Self::Point => {
                if !buffer.contains('.') {
                    buffer.push('.');
                }
            }
            Self::Backspace => {
                if buffer.chars().count() <= 1 {
                    *buffer = "0".to_string();
                } else {
                    buffer.pop();
                }
            }
            Self::Clear => *buffer = "0".to_string(),
        }
    }
}

impl fmt::Display for KeypadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which amount field receives keypad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIs)]
pub enum ActiveField {
    #[default]
    Dzd,
    Foreign,
}

/// The two amount buffers plus the active-field selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountState {
    pub dzd: String,
    pub foreign: String,
    pub active: ActiveField,
}

impl Default for AmountState {
    fn default() -> Self {
        Self {
            dzd: "0".to_string(),
            foreign: "0".to_string(),
            active: ActiveField::default(),
        }
    }
}

impl AmountState {
    pub fn new(dzd: impl Into<String>, foreign: impl Into<String>) -> Self {
        Self {
            dzd: dzd.into(),
            foreign: foreign.into(),
            active: ActiveField::default(),
        }
    }

    /// Makes `field` the target of keypad input. Buffers are untouched.
    pub fn focus(&mut self, field: ActiveField) {
        self.active = field;
    }

    pub fn buffer(&self, field: ActiveField) -> &str {
        match field {
            ActiveField::Dzd => &self.dzd,
            ActiveField::Foreign => &self.foreign,
        }
    }

    pub fn buffer_mut(&mut self, field: ActiveField) -> &mut String {
        match field {
            ActiveField::Dzd => &mut self.dzd,
            ActiveField::Foreign => &mut self.foreign,
        }
    }

    /// Types `key` into the active buffer and returns the field that changed.
    pub fn press(&mut self, key: KeypadKey) -> ActiveField {
        let field = self.active;
        key.apply(self.buffer_mut(field));
        field
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn typed(start: &str, keys: &[KeypadKey]) -> String {
        let mut buffer = start.to_string();
        for key in keys {
            key.apply(&mut buffer);
        }
        buffer
    }

    #[test]
    fn digits_replace_a_lone_zero() {
        let keys = [
            KeypadKey::Digit(1),
            KeypadKey::Digit(2),
            KeypadKey::Digit(3),
        ];
        assert_eq!(typed("0", &keys), "123");
    }

    #[test]
    fn zero_on_zero_stays_zero() {
        assert_eq!(typed("0", &[KeypadKey::Digit(0)]), "0");
    }

    #[rstest]
    #[case("5", "0")]
    #[case("0", "0")]
    #[case("", "0")]
    #[case("12", "1")]
    #[case("1.", "1")]
    fn backspace(#[case] start: &str, #[case] expected: &str) {
        assert_eq!(typed(start, &[KeypadKey::Backspace]), expected);
    }

    #[test]
    fn point_is_added_once() {
        let buffer = typed("0", &[KeypadKey::Point, KeypadKey::Point]);
        assert_eq!(buffer, "0.");
        assert_eq!(buffer.matches('.').count(), 1);
    }

    #[test]
    fn digits_after_point_append() {
        let keys = [KeypadKey::Point, KeypadKey::Digit(0), KeypadKey::Digit(5)];
        assert_eq!(typed("0", &keys), "0.05");
    }

    #[test]
    fn clear_resets() {
        assert_eq!(typed("987.65", &[KeypadKey::Clear]), "0");
    }

    #[test]
    fn press_only_touches_the_active_buffer() {
        let mut state = AmountState::new("10", "20");
        state.press(KeypadKey::Digit(5));
        assert_eq!(state.dzd, "105");
        assert_eq!(state.foreign, "20");

        state.focus(ActiveField::Foreign);
        assert_eq!(state.dzd, "105");
        assert_eq!(state.press(KeypadKey::Clear), ActiveField::Foreign);
        assert_eq!(state.foreign, "0");
        assert_eq!(state.dzd, "105");
    }

    #[rstest]
    #[case("7", Some(KeypadKey::Digit(7)))]
    #[case(",", Some(KeypadKey::Point))]
    #[case("Decimal", Some(KeypadKey::Point))]
    #[case("Backspace", Some(KeypadKey::Backspace))]
    #[case("Escape", Some(KeypadKey::Clear))]
    #[case("a", None)]
    #[case("F1", None)]
    fn maps_keyboard_keys(#[case] key: &str, #[case] expected: Option<KeypadKey>) {
        assert_eq!(KeypadKey::from_keyboard(key), expected);
    }

    #[test]
    fn layout_labels() {
        let labels = KEYPAD_LAYOUT.iter().map(KeypadKey::label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["7", "8", "9", "4", "5", "6", "1", "2", "3", ".", "0", "⌫", "C"]
        );
    }
}
