//! Structural transforms and combination helpers.

use super::case::{lower, upper};

/// Separators people put between two tokens.
pub const SEPARATORS: &[&str] = &["_", ".", "-", "@"];

const VOWELS: &str = "aeiouáéíóúAEIOUÁÉÍÓÚ";

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// "carlos" → "carloscarlos".
pub fn duplicate(s: &str) -> String {
    s.repeat(2)
}

/// "carlos" → "carlosCARLOS".
pub fn duplicate_upper(s: &str) -> String {
    lower(s) + &upper(s)
}

/// First `n` characters.
pub fn truncate_left(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Last `n` characters.
pub fn truncate_right(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}

pub fn remove_vowels(s: &str) -> String {
    s.chars().filter(|c| !VOWELS.contains(*c)).collect()
}

pub fn concat(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

pub fn join(a: &str, sep: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + sep.len() + b.len());
    out.push_str(a);
    out.push_str(sep);
    out.push_str(b);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural() {
        assert_eq!(reverse("carlos"), "solrac");
        assert_eq!(duplicate("ab"), "abab");
        assert_eq!(duplicate_upper("Ab"), "abAB");
        assert_eq!(remove_vowels("carlos"), "crls");
        assert_eq!(remove_vowels("josé"), "js");
    }

    #[test]
    fn truncation_is_char_aware() {
        assert_eq!(truncate_left("carlos", 3), "car");
        assert_eq!(truncate_right("carlos", 3), "los");
        assert_eq!(truncate_left("ab", 5), "ab");
        assert_eq!(truncate_right("toño", 2), "ño");
    }

    #[test]
    fn combination() {
        assert_eq!(concat("carlos", "1990"), "carlos1990");
        assert_eq!(join("carlos", "_", "1990"), "carlos_1990");
    }
}
