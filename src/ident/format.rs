//! How people write a document number inside a password.

use crate::unique::UniqueList;

/// Compact, dot-grouped and dash-grouped forms. A seven-digit number also
/// appears without its leading (millions) digit.
pub fn formats(n: u64) -> Vec<String> {
    let raw = n.to_string();
    let mut out = UniqueList::new();
    out.push(raw.clone());
    out.push(group(&raw, '.'));
    out.push(group(&raw, '-'));
    if raw.len() == 7 {
        out.push(&raw[1..]);
    }
    out.into_vec()
}

/// `30123456` → `30.123.456`.
pub fn format_with_dots(n: u64) -> String {
    group(&n.to_string(), '.')
}

/// `30123456` → `30-123-456`.
pub fn format_with_dashes(n: u64) -> String {
    group(&n.to_string(), '-')
}

/// Digits of `s` with `.`, `-` and spaces ignored. Anything else, or no
/// digits at all, is rejected.
pub fn parse_digits(s: &str) -> Option<u64> {
    let digits = clean(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// `s` with the grouping characters removed.
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '.' | '-' | ' '))
        .collect()
}

/// Thousands grouping from the right.
fn group(raw: &str, sep: char) -> String {
    let len = raw.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(30_123_456, "30.123.456")]
    #[case(1_234_567, "1.234.567")]
    #[case(123, "123")]
    #[case(0, "0")]
    fn dots(#[case] n: u64, #[case] expected: &str) {
        assert_eq!(format_with_dots(n), expected);
    }

    #[test]
    fn dashes() {
        assert_eq!(format_with_dashes(30_123_456), "30-123-456");
    }

    #[test]
    fn seven_digits_drop_leading_digit() {
        assert_eq!(
            formats(1_234_567),
            vec!["1234567", "1.234.567", "1-234-567", "234567"]
        );
        assert_eq!(formats(30_123_456).len(), 3);
    }

    #[rstest]
    #[case("30.123.456", Some(30_123_456))]
    #[case("30-123-456", Some(30_123_456))]
    #[case(" 30 123 456 ", Some(30_123_456))]
    #[case("30a123456", None)]
    #[case("..", None)]
    fn parsing(#[case] raw: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_digits(raw), expected);
    }

    proptest! {
        #[test]
        fn prop_dotted_eight_digits_parse_back(n in 10_000_000u64..=99_999_999) {
            prop_assert_eq!(parse_digits(&format_with_dots(n)), Some(n));
        }

        #[test]
        fn prop_dashed_parse_back(n in 0u64..=999_999_999) {
            prop_assert_eq!(parse_digits(&format_with_dashes(n)), Some(n));
        }
    }
}
