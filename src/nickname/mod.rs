//! Nickname resolver.
//!
//! A given name resolves to the union of its dictionary entries and the
//! rule-generated diminutives. The rules always run, even on a dictionary
//! hit, because people mix curated and improvised forms.

mod dict;

pub use dict::NicknameBook;

use crate::rules::RuleTable;
use crate::transform::truncate_left;
use crate::unique::UniqueList;
use crate::wordlist;

const DIMINUTIVES: &[&str] = &["ito", "ita", "in", "i", "y"];
const STEM_DIMINUTIVES: &[&str] = &["i", "ito", "ita"];

/// Nicknames for `name`, dictionary entries first. Never contains the name
/// itself.
pub fn resolve(book: &NicknameBook, name: &str) -> Vec<String> {
    let lower = name.trim().to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }

    let mut out = UniqueList::new();
    for nick in book.lookup(&lower) {
        out.push(nick.to_lowercase());
    }
    for nick in fallback(&lower) {
        out.push(nick);
    }

    out.into_vec().into_iter().filter(|n| *n != lower).collect()
}

/// Rule-based diminutives for a lower-cased name.
pub fn fallback(lower: &str) -> Vec<String> {
    let chars: Vec<char> = lower.chars().collect();
    let len = chars.len();
    let mut out = UniqueList::new();

    for n in [3, 4, 5] {
        if len > n {
            out.push(truncate_left(lower, n));
        }
    }

    for suffix in DIMINUTIVES {
        out.push(format!("{lower}{suffix}"));
    }

    if len > 3 {
        let stem: String = chars[..len - 1].iter().collect();
        for suffix in STEM_DIMINUTIVES {
            out.push(format!("{stem}{suffix}"));
        }
    }

    if len > 2 && matches!(chars[len - 1], 'o' | 'a') {
        let stem: String = chars[..len - 1].iter().collect();
        out.push(format!("{stem}i"));
    }

    out.into_vec().into_iter().filter(|n| n != lower).collect()
}

/// Every resolved nickname pushed back through the transform library and the
/// common affix tables.
pub fn full_variants(book: &NicknameBook, rules: &RuleTable, name: &str) -> Vec<String> {
    let mut out = UniqueList::new();
    for nick in resolve(book, name) {
        out.extend(wordlist::all_variants(&nick, rules));
    }
    out.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::LeetMap;

    #[test]
    fn dictionary_hit_comes_first() {
        let nicks = resolve(&NicknameBook::spanish(), "Carlos");
        assert_eq!(&nicks[..3], &["cali", "carl", "carli"]);
        assert!(nicks.contains(&"carlitos".to_string()));
        assert!(nicks.contains(&"carlo".to_string()));
        assert!(!nicks.contains(&"carlos".to_string()));
    }

    #[test]
    fn name_listed_as_its_own_nickname_is_dropped() {
        let nicks = resolve(&NicknameBook::spanish(), "gabriel");
        assert!(nicks.contains(&"gabo".to_string()));
        assert!(!nicks.contains(&"gabriel".to_string()));
    }

    #[test]
    fn fallback_rules() {
        let nicks = fallback("roberto");
        for expected in ["rob", "robe", "rober", "robertoito", "roberti", "robertito"] {
            assert!(nicks.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn short_names_skip_truncation() {
        let nicks = fallback("ana");
        assert!(!nicks.iter().any(|n| n.len() < 3));
        assert!(nicks.contains(&"ani".to_string()));
    }

    #[test]
    fn unknown_name_uses_rules_only() {
        let nicks = resolve(&NicknameBook::empty(), "zoraida");
        assert_eq!(nicks, fallback("zoraida"));
    }

    #[test]
    fn empty_name_resolves_to_nothing() {
        assert!(resolve(&NicknameBook::spanish(), "  ").is_empty());
    }

    #[test]
    fn full_variants_include_cased_and_affixed_forms() {
        let rules = RuleTable::minimal();
        let variants = full_variants(&NicknameBook::spanish(), &rules, "tomas");
        assert!(variants.contains(&"TOMI".to_string()));
        assert!(variants.contains(&"Tomi1".to_string()));
        assert!(variants.contains(&"tomi2020".to_string()));
        assert!(variants.contains(&"tomi20".to_string()));
    }

    #[test]
    fn full_variants_use_the_rule_leet_map() {
        let mut rules = RuleTable::minimal();
        rules.leet = LeetMap::from_pairs(&[('o', '*')]);
        let variants = full_variants(&NicknameBook::spanish(), &rules, "tomas");
        assert!(variants.contains(&"t*mi2020".to_string()));
        assert!(!variants.contains(&"70mi".to_string()));
        assert!(!variants.iter().any(|v| v.starts_with("70m")));
    }
}
