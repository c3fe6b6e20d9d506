//! Affix and pattern tables.
//!
//! Tables are plain data handed to the engine. Nothing in the expansion
//! logic refers to a specific suffix or prefix literal, so a reduced or
//! locale-specific table can be swapped in without touching it.

use crate::transform::LeetMap;
use crate::unique::UniqueList;

/// Ordered affix catalogs used uniformly across generation stages.
#[derive(Debug, Clone)]
pub struct RuleTable {
    /// 0-100, two-digit years, four-digit years and keypad runs.
    pub num_suffixes: Vec<String>,
    pub special_suffixes: Vec<String>,
    /// Number + symbol endings that satisfy complexity policies ("1!", "123@").
    pub num_symbol_suffixes: Vec<String>,
    pub num_prefixes: Vec<String>,
    pub special_prefixes: Vec<String>,
    /// Values wrapped around a token on both sides ("1carlos1").
    pub sandwich_numbers: Vec<String>,
    /// Short endings appended after `token + year`.
    pub year_number_suffixes: Vec<String>,
    /// Endings appended to two joined atoms.
    pub combo_suffixes: Vec<String>,
    /// Endings appended to `token + date`.
    pub date_suffixes: Vec<String>,
    /// Endings appended to identity-document forms.
    pub doc_suffixes: Vec<String>,
    /// Short numeric and symbol endings used for relatives.
    pub short_num_suffixes: Vec<String>,
    pub short_special_suffixes: Vec<String>,
    /// Generic affixes for nickname and mask style expansion.
    pub common_suffixes: Vec<String>,
    pub common_prefixes: Vec<String>,
    /// Words mixed with personal tokens ("carlospass", "amor_carlos").
    pub keywords: Vec<String>,
    /// Standalone keyboard walks and top-leak words.
    pub keyboard_patterns: Vec<String>,
    /// Years in which a child or pet plausibly entered the target's life.
    pub recent_years: Vec<String>,
    /// Year window for nickname full-variant expansion.
    pub variant_years: (u32, u32),
    /// How many numeric suffixes the initial + surname stage uses.
    pub initial_suffix_count: usize,
    pub leet: LeetMap,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            num_suffixes: num_suffixes(),
            special_suffixes: strings(&[
                "!", "!!", "!!!", ".", "..", "...", "@", "#", "$", "%", "&", "*", "!1", "!12",
                "!123", "!1234", "!@", "!@#", "!@#$", "!@#$%", "@1", "@123", "@1234", "#1",
                "#123", "$1", "$123", "1!", "1!!", "12!", "123!", "1234!", ".*", "**", "_1",
                "_12", "_123", "-1", "-12", "-123",
            ]),
            num_symbol_suffixes: strings(&[
                "1!", "1!!", "2!", "12!", "123!", "1234!", "1@", "12@", "123@", "1#", "12#",
                "123#", "01!", "0!", "00!", "1.", "12.", "123.",
            ]),
            num_prefixes: strings(&[
                "1", "12", "123", "0", "00", "01", "007", "69", "99", "11", "22", "33",
            ]),
            special_prefixes: strings(&["!", "@", "#", "$"]),
            sandwich_numbers: strings(&["1", "12", "123", "0", "01", "00", "007"]),
            year_number_suffixes: strings(&["1", "2", "3", "12", "123"]),
            combo_suffixes: strings(&["!", "1", "12", "123", "1234", "@", "#", "1!"]),
            date_suffixes: strings(&["!", "@", "#", "1", "123"]),
            doc_suffixes: strings(&["!", "@", "#", ".", "1", "12", "123"]),
            short_num_suffixes: strings(&[
                "1", "2", "3", "12", "21", "123", "1234", "12345", "0", "00", "01", "007", "111",
                "222", "333", "777", "999",
            ]),
            short_special_suffixes: strings(&["!", "!!", ".", "@", "#", "1!", "123!", "!1"]),
            common_suffixes: strings(&[
                "1", "12", "123", "1234", "12345", "123456", "0", "01", "02", "007", "09", "10",
                "!", "!!", "!123", "#", "@", ".*", ".", "*", "?", "!@#", "@123", "#123", "2024",
                "2023", "2022", "2021", "2020", "2019", "2018", "2000", "1999", "1!", "123!",
                "1234!", "12!", "99", "00", "11", "22", "33", "44", "55", "66", "77", "88",
            ]),
            common_prefixes: strings(&["!", "@", "#", "123", "000", "1", "el", "la", "los"]),
            keywords: strings(&[
                "pass", "password", "passwd", "clave", "key", "secret", "amor", "love", "mi",
                "baby", "bebe", "bb", "admin", "root", "user", "web", "mail", "net", "123",
                "1234", "12345", "forever", "always", "lucky",
            ]),
            keyboard_patterns: strings(&[
                "qwerty", "qwerty123", "qwertyuiop", "asdf", "asdfgh", "asdfghjkl", "zxcvbn",
                "abc123", "abc", "abcd", "password", "pass", "passwd", "admin", "root", "user",
                "login", "letmein", "welcome", "iloveyou", "dragon", "monkey", "shadow",
                "sunshine", "princess", "football", "superman", "batman",
            ]),
            recent_years: (2005..=2025).map(|y| y.to_string()).collect(),
            variant_years: (2000, 2025),
            initial_suffix_count: 50,
            leet: LeetMap::default(),
        }
    }
}

impl RuleTable {
    /// A table with one entry per category, for tests and dry runs.
    pub fn minimal() -> Self {
        Self {
            num_suffixes: strings(&["1"]),
            special_suffixes: strings(&["!"]),
            num_symbol_suffixes: strings(&["1!"]),
            num_prefixes: strings(&["1"]),
            special_prefixes: strings(&["!"]),
            sandwich_numbers: strings(&["1"]),
            year_number_suffixes: strings(&["1"]),
            combo_suffixes: strings(&["!"]),
            date_suffixes: strings(&["!"]),
            doc_suffixes: strings(&["!"]),
            short_num_suffixes: strings(&["1"]),
            short_special_suffixes: strings(&["!"]),
            common_suffixes: strings(&["1"]),
            common_prefixes: strings(&["1"]),
            keywords: strings(&["pass"]),
            keyboard_patterns: strings(&["qwerty"]),
            recent_years: strings(&["2020"]),
            variant_years: (2020, 2020),
            initial_suffix_count: 1,
            leet: LeetMap::default(),
        }
    }

    /// Initial + surname uses only the most frequent numeric suffixes.
    pub fn initial_suffixes(&self) -> &[String] {
        let n = self.initial_suffix_count.min(self.num_suffixes.len());
        &self.num_suffixes[..n]
    }

    /// Two-digit tails of `recent_years`.
    pub fn recent_short_years(&self) -> Vec<String> {
        self.recent_years
            .iter()
            .filter_map(|y| short_year(y))
            .map(str::to_string)
            .collect()
    }
}

/// Last two characters of a four-digit year.
pub fn short_year(year: &str) -> Option<&str> {
    if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        Some(&year[2..])
    } else {
        None
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn num_suffixes() -> Vec<String> {
    let mut out = UniqueList::new();
    out.extend((0..=100).map(|n| n.to_string()));
    out.extend((60..=99).map(|n| n.to_string()));
    out.extend((1960..=2025).map(|y| y.to_string()));
    out.extend([
        "123", "1234", "12345", "123456", "1234567", "12345678", "123456789", "111", "222",
        "333", "444", "555", "666", "777", "888", "999", "000", "1111", "2222", "3333", "4444",
        "5555", "1212", "2121", "3131", "1122", "2211", "321", "4321", "54321", "112", "121",
        "211", "007", "069", "420", "101", "404",
    ]);
    out.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_suffixes_are_unique_and_ordered() {
        let table = RuleTable::default();
        assert_eq!(table.num_suffixes[0], "0");
        assert_eq!(table.num_suffixes[100], "100");
        assert_eq!(table.num_suffixes[101], "1960");
        let mut sorted = table.num_suffixes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), table.num_suffixes.len());
    }

    #[test]
    fn short_year_requires_four_digits() {
        assert_eq!(short_year("1990"), Some("90"));
        assert_eq!(short_year("90"), None);
        assert_eq!(short_year("19a0"), None);
    }

    #[test]
    fn recent_short_years() {
        let table = RuleTable::default();
        let short = table.recent_short_years();
        assert_eq!(short.first().map(String::as_str), Some("05"));
        assert_eq!(short.last().map(String::as_str), Some("25"));
    }

    #[test]
    fn initial_suffixes_are_capped() {
        let table = RuleTable::minimal();
        assert_eq!(table.initial_suffixes(), &["1".to_string()]);
    }
}
