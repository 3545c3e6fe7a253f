//! Turns free-form typed text into amounts and rates.
//!
//! Every function here is total: bad input degrades to `"0"` or `0.0`, never to an error.

/// Normalizes typed text into a plain non-negative decimal string.
///
/// Anything other than digits, `.` and `,` is dropped and `,` counts as a
/// decimal point. Extra points are collapsed into the fraction instead of
/// rejecting the input.
///
/// # Examples
/// ```
/// use rates::input::sanitize_number_input;
///
/// assert_eq!(sanitize_number_input("1 234,5"), "1234.5");
/// assert_eq!(sanitize_number_input("1.2.3"), "1.23");
/// assert_eq!(sanitize_number_input(".5"), "0.5");
/// assert_eq!(sanitize_number_input("abc"), "0");
/// ```
pub fn sanitize_number_input(value: &str) -> String {
    let normalized = value
        .chars()
        .filter_map(|ch| match ch {
            '0'..='9' | '.' => Some(ch),
            ',' => Some('.'),
            _ => None,
        })
        .collect::<String>();

    if normalized.is_empty() {
        return "0".to_string();
    }

    let (integer, fraction) = match normalized.split_once('.') {
        Some((integer, rest)) => (integer, Some(rest.replace('.', ""))),
        None => (normalized.as_str(), None),
    };

    let integer = if integer.is_empty() { "0" } else { integer };
    match fraction {
        Some(fraction) => format!("{integer}.{fraction}"),
        None => integer.to_string(),
    }
}

/// Reads the leading number out of an amount buffer.
///
/// Mirrors a lenient float parse: leading whitespace is skipped, the longest
/// `[+-]digits[.digits][e[+-]digits]` prefix is used, and anything
/// unparseable is `0`.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - digits_start;
    if bytes.get(end) == Some(&b'.') {
        let point = end;
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        digits += end - point - 1;
    }

    if digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Reads a base-rate field. Text that is not a finite number becomes `0`.
pub fn coerce_rate(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::*;

    use super::*;

    fn is_plain_decimal(s: &str) -> bool {
        let mut parts = s.split('.');
        let integer = parts.next().unwrap_or("");
        let fraction = parts.next().unwrap_or("");
        parts.next().is_none()
            && integer.chars().all(|c| c.is_ascii_digit())
            && fraction.chars().all(|c| c.is_ascii_digit())
    }

    #[rstest]
    #[case("", "0")]
    #[case("abc", "0")]
    #[case("-", "0")]
    #[case("123", "123")]
    #[case("-42", "42")]
    #[case("12,5", "12.5")]
    #[case("1,2,3", "1.23")]
    #[case("1.2.3.4", "1.234")]
    #[case(".5", "0.5")]
    #[case(".", "0.")]
    #[case(".1.2", "0.12")]
    #[case("12.", "12.")]
    #[case("1 500 DZD", "1500")]
    #[case("٣4", "4")]
    #[case("007", "007")]
    fn sanitizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_number_input(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("..,,")]
    #[case("a1b2c3")]
    #[case(",,5")]
    #[case("1e10")]
    #[case("9.9.9,9")]
    #[case("   ")]
    #[case("€ 12,34")]
    fn output_is_a_plain_decimal_and_stable(#[case] input: &str) {
        let once = sanitize_number_input(input);
        assert!(!once.is_empty());
        assert!(is_plain_decimal(&once), "{once:?} is not a plain decimal");
        assert_eq!(sanitize_number_input(&once), once);
    }

    #[rstest]
    #[case("123", 123.0)]
    #[case("12.5", 12.5)]
    #[case("12.", 12.0)]
    #[case(".5", 0.5)]
    #[case("0", 0.0)]
    #[case("", 0.0)]
    #[case(".", 0.0)]
    #[case("abc", 0.0)]
    #[case("  42abc", 42.0)]
    #[case("3.14.15", 3.14)]
    #[case("-7", -7.0)]
    #[case("1e3", 1000.0)]
    #[case("2.5E-1", 0.25)]
    #[case("4e2x", 400.0)]
    #[case("1e", 1.0)]
    #[case("1e+", 1.0)]
    #[case(".e3", 0.0)]
    #[case("1e400", 0.0)]
    fn parses_amounts_leniently(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_amount(input), expected);
    }

    #[rstest]
    #[case("146.5", 146.5)]
    #[case(" 136.2 ", 136.2)]
    #[case("", 0.0)]
    #[case("abc", 0.0)]
    #[case("NaN", 0.0)]
    #[case("inf", 0.0)]
    fn coerces_rates(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(coerce_rate(input), expected);
    }

    proptest! {
        #[test]
        fn sanitized_text_is_a_stable_plain_decimal(input in any::<String>()) {
            let once = sanitize_number_input(&input);
            prop_assert!(!once.is_empty());
            prop_assert!(is_plain_decimal(&once), "{:?} -> {:?}", input, once);
            prop_assert_eq!(sanitize_number_input(&once), once);
        }

        #[test]
        fn sanitized_numeric_text_keeps_its_digits(input in "[0-9.,]{0,12}") {
            let once = sanitize_number_input(&input);
            let kept = once
                .chars()
                .filter(char::is_ascii_digit)
                .collect::<String>();
            let typed = input
                .chars()
                .filter(char::is_ascii_digit)
                .collect::<String>();
            prop_assert!(kept.ends_with(&typed));
        }

        #[test]
        fn parsed_amounts_are_finite(input in any::<String>()) {
            prop_assert!(parse_amount(&input).is_finite());
        }
    }
}
