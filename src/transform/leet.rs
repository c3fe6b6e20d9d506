//! Leet substitution.

/// Inputs longer than this skip the combinatorial expansion.
pub const FULL_LEET_CAP: usize = 10;

/// Canonical single-substitute table, matched case-insensitively.
pub const CANONICAL: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
    ('g', '9'),
    ('z', '2'),
    ('l', '1'),
    ('b', '8'),
];

const VOWELS: &[(char, char)] = &[('a', '4'), ('e', '3'), ('i', '1'), ('o', '0'), ('u', 'v')];

/// A character → substitute table. Swappable so reduced or locale specific
/// maps can be injected into the engine.
///
/// The vowel table drives [`LeetMap::vowels`]. [`LeetMap::from_pairs`] takes
/// it from the vowel entries of `pairs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeetMap {
    pairs: Vec<(char, char)>,
    vowels: Vec<(char, char)>,
}

impl Default for LeetMap {
    fn default() -> Self {
        Self {
            pairs: CANONICAL.to_vec(),
            vowels: VOWELS.to_vec(),
        }
    }
}

impl LeetMap {
    pub fn from_pairs(pairs: &[(char, char)]) -> Self {
        let vowels = pairs
            .iter()
            .filter(|(from, _)| "aeiou".contains(*from))
            .copied()
            .collect();
        Self {
            pairs: pairs.to_vec(),
            vowels,
        }
    }

    /// Replaces the vowel table.
    pub fn with_vowels(mut self, vowels: &[(char, char)]) -> Self {
        self.vowels = vowels.to_vec();
        self
    }

    pub fn substitute(&self, c: char) -> Option<char> {
        lookup(&self.pairs, c)
    }

    pub fn simple(&self, s: &str) -> String {
        simple_with(&self.pairs, s)
    }

    pub fn full(&self, s: &str) -> Vec<String> {
        full_with(&self.pairs, s)
    }

    pub fn vowels(&self, s: &str) -> String {
        simple_with(&self.vowels, s)
    }
}

/// One-pass substitution with the canonical table: "carlos" → "c4r105".
pub fn leet_simple(s: &str) -> String {
    simple_with(CANONICAL, s)
}

/// Every keep/substitute combination over the canonical table, minus the
/// unmodified lower-cased input.
pub fn leet_full(s: &str) -> Vec<String> {
    full_with(CANONICAL, s)
}

/// Vowels only, `u` becoming `v`.
pub fn leet_vowels(s: &str) -> String {
    simple_with(VOWELS, s)
}

fn lookup(pairs: &[(char, char)], c: char) -> Option<char> {
    let key = c.to_ascii_lowercase();
    pairs
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

fn simple_with(pairs: &[(char, char)], s: &str) -> String {
    s.chars().map(|c| lookup(pairs, c).unwrap_or(c)).collect()
}

/// Folds over character positions, doubling the carried list at each
/// substitutable one. With k substitutable characters the result holds
/// 2^k - 1 strings; the cap keeps k ≤ 10.
fn full_with(pairs: &[(char, char)], s: &str) -> Vec<String> {
    let lower = s.to_lowercase();

    if lower.chars().count() > FULL_LEET_CAP {
        let simple = simple_with(pairs, &lower);
        return if simple == lower { Vec::new() } else { vec![simple] };
    }

    let mut variants = vec![String::with_capacity(lower.len())];
    for c in lower.chars() {
        match lookup(pairs, c) {
            Some(sub) if sub != c => {
                let mut next = Vec::with_capacity(variants.len() * 2);
                for prefix in variants {
                    let mut kept = prefix.clone();
                    kept.push(c);
                    let mut swapped = prefix;
                    swapped.push(sub);
                    next.push(kept);
                    next.push(swapped);
                }
                variants = next;
            }
            _ => variants.iter_mut().for_each(|v| v.push(c)),
        }
    }

    variants.retain(|v| *v != lower);
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn simple_substitution() {
        assert_eq!(leet_simple("carlos"), "c4r105");
        assert_eq!(leet_simple("Tomas"), "70m45");
        assert_eq!(leet_simple(""), "");
    }

    #[test]
    fn single_substitutable_char() {
        assert_eq!(leet_full("e"), vec!["3"]);
    }

    #[test]
    fn full_variants_exclude_original() {
        let variants = leet_full("sol");
        assert_eq!(variants.len(), 7);
        assert!(!variants.contains(&"sol".to_string()));
        assert!(variants.contains(&"501".to_string()));
    }

    #[test]
    fn long_input_falls_back_to_simple() {
        assert_eq!(leet_full("maximiliano"), vec!["m4x1m1114n0"]);
        assert!(leet_full("rrrrrrrrrrrr").is_empty());
    }

    #[test]
    fn no_substitutable_chars_yields_nothing() {
        assert!(leet_full("hmm").is_empty());
        assert!(leet_full("xyr").is_empty());
    }

    #[test]
    fn z_is_substitutable() {
        assert_eq!(leet_full("xyz"), vec!["xy2"]);
    }

    #[test]
    fn vowel_leet() {
        assert_eq!(leet_vowels("lucas"), "lvc4s");
    }

    #[test]
    fn injected_map() {
        let map = LeetMap::from_pairs(&[('a', '@')]);
        assert_eq!(map.simple("ana"), "@n@");
        assert_eq!(map.full("ana").len(), 3);
        assert_eq!(map.vowels("carlos"), "c@rlos");
        assert_eq!(LeetMap::default().vowels("lucas"), "lvc4s");
    }

    proptest! {
        #[test]
        fn prop_full_cardinality(s in "[a-z]{1,10}") {
            let k = s.chars().filter(|c| lookup(CANONICAL, *c).is_some()).count();
            let variants = leet_full(&s);
            prop_assert_eq!(variants.len(), (1usize << k) - 1);
            prop_assert!(!variants.contains(&s));
        }
    }
}
