//! Human-readable rendering of amounts and rates.
//!
//! Output is for display only. Never parse it back for further arithmetic.

use serde::Deserialize;
use serde::Serialize;
use thousands::digits;
use thousands::Separable;
use thousands::SeparatorPolicy;

/// Digit grouping and decimal separators for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberStyle {
    pub group: char,
    pub decimal: char,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl NumberStyle {
    /// `1,234.5`
    pub const ENGLISH: Self = Self {
        group: ',',
        decimal: '.',
    };
    /// `1 234,5` with a narrow no-break space.
    pub const FRENCH: Self = Self {
        group: '\u{202f}',
        decimal: ',',
    };
    /// `1.234,5`
    pub const CONTINENTAL: Self = Self {
        group: '.',
        decimal: ',',
    };

    /// Picks a style from a language tag such as `fr-DZ`, `de_DE.UTF-8` or `en`.
    /// Unknown languages get the English style.
    pub fn from_locale_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match language.as_str() {
            "fr" => Self::FRENCH,
            "ar" | "de" | "es" | "it" | "nl" | "pt" | "tr" => Self::CONTINENTAL,
            _ => Self::ENGLISH,
        }
    }

    fn group_digits(&self, integer: &str) -> String {
        let mut buf = [0u8; 4];
        integer.separate_by_policy(SeparatorPolicy {
            separator: self.group.encode_utf8(&mut buf),
            groups: &[3],
            digits: digits::ASCII_DECIMAL,
        })
    }
}

/// Formats `value` with the English style. See [`format_display_with`].
pub fn format_display(value: f64) -> String {
    format_display_with(value, &NumberStyle::default())
}

/// Formats a number for display.
///
/// - non-finite or zero: `"0"`
/// - magnitude of 1000 or more: grouped, up to 2 fraction digits
/// - magnitude in `[1, 1000)`: exactly 2 fraction digits
/// - magnitude below 1: between 4 and 6 fraction digits
pub fn format_display_with(value: f64, style: &NumberStyle) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let (min_fraction, max_fraction) = if magnitude >= 1000.0 {
        (0, 2)
    } else if magnitude >= 1.0 {
        (2, 2)
    } else {
        (4, 6)
    };

    let fixed = round_half_away(magnitude, max_fraction);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let keep = fraction.trim_end_matches('0').len().max(min_fraction);
    let fraction = &fraction[..keep];

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let integer = style.group_digits(integer);
    if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}{}{fraction}", style.decimal)
    }
}

/// Renders `magnitude` with exactly `places` fraction digits, rounding ties
/// away from zero.
fn round_half_away(magnitude: f64, places: usize) -> String {
    let scaled = (magnitude * 10f64.powi(places as i32)).round();
    if !scaled.is_finite() {
        return format!("{magnitude:.places$}");
    }
    let digits = format!("{scaled:.0}");
    let digits = format!("{digits:0>width$}", width = places + 1);
    let (integer, fraction) = digits.split_at(digits.len() - places);
    if places == 0 {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn fraction_digits(s: &str) -> usize {
        s.split_once('.').map(|(_, f)| f.len()).unwrap_or(0)
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(-0.0, "0")]
    #[case(f64::NAN, "0")]
    #[case(f64::INFINITY, "0")]
    #[case(f64::NEG_INFINITY, "0")]
    #[case(1500.0, "1,500")]
    #[case(1234.567, "1,234.57")]
    #[case(1234.5, "1,234.5")]
    #[case(1234567.891, "1,234,567.89")]
    #[case(12.3, "12.30")]
    #[case(1.0, "1.00")]
    #[case(999.999, "1,000.00")]
    #[case(0.5, "0.5000")]
    #[case(0.1234567, "0.123457")]
    #[case(0.00734214, "0.007342")]
    #[case(-2500.5, "-2,500.5")]
    #[case(-0.25, "-0.2500")]
    #[case(1.125, "1.13")]
    #[case(-1.125, "-1.13")]
    #[case(146.125, "146.13")]
    #[case(1000.125, "1,000.13")]
    fn formats(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_display(value), expected);
    }

    #[test]
    fn small_values_keep_four_to_six_fraction_digits() {
        for value in [0.5, 0.1, 0.123456789, 0.000001, 0.99] {
            let digits = fraction_digits(&format_display(value));
            assert!((4..=6).contains(&digits), "{value} -> {digits} digits");
        }
    }

    #[test]
    fn large_values_keep_at_most_two_fraction_digits() {
        for value in [1500.0, 1000.001, 98765.4321, 1e9 + 0.5] {
            assert!(fraction_digits(&format_display(value)) <= 2);
        }
    }

    #[rstest]
    #[case("fr-DZ", NumberStyle::FRENCH)]
    #[case("fr", NumberStyle::FRENCH)]
    #[case("de_DE.UTF-8", NumberStyle::CONTINENTAL)]
    #[case("ar-DZ", NumberStyle::CONTINENTAL)]
    #[case("en-US", NumberStyle::ENGLISH)]
    #[case("C", NumberStyle::ENGLISH)]
    #[case("", NumberStyle::ENGLISH)]
    fn picks_styles_from_locale_tags(#[case] tag: &str, #[case] expected: NumberStyle) {
        assert_eq!(NumberStyle::from_locale_tag(tag), expected);
    }

    #[test]
    fn uses_the_style_separators() {
        assert_eq!(
            format_display_with(1500.25, &NumberStyle::FRENCH),
            "1\u{202f}500,25"
        );
        assert_eq!(
            format_display_with(1234567.0, &NumberStyle::CONTINENTAL),
            "1.234.567"
        );
        assert_eq!(format_display_with(0.5, &NumberStyle::FRENCH), "0,5000");
    }
}
