//! Transform library.
//!
//! Pure string operations used by every generation stage. None of them fail:
//! empty input yields empty output.

mod case;
mod leet;
mod structure;

pub use case::*;
pub use leet::*;
pub use structure::*;

use crate::unique::UniqueList;

/// Every single-token form of `base`, ordered and deduplicated. Leet forms
/// come from `leet`.
pub fn forms(base: &str, leet: &LeetMap) -> Vec<String> {
    if base.is_empty() {
        return Vec::new();
    }

    let low = lower(base);
    let cap = capitalize(&low);

    let mut out = UniqueList::new();
    out.push(low.clone());
    out.push(upper(&low));
    out.push(cap.clone());
    out.push(leet.simple(&low));
    out.push(leet.simple(&cap));
    out.push(reverse(&low));
    out.push(toggle_case(&low));
    out.push(toggle_case_inverse(&low));
    out.push(remove_vowels(&low));
    out.push(capitalize_last(&low));
    out.push(capitalize_first_last(&low));
    out.push(duplicate(&low));
    out.push(duplicate_upper(&low));
    out.push(leet.vowels(&low));
    out.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_start_with_plain_casings() {
        let f = forms("Carlos", &LeetMap::default());
        assert_eq!(&f[..3], &["carlos", "CARLOS", "Carlos"]);
        assert!(f.contains(&"C4r105".to_string()));
        assert!(f.contains(&"solrac".to_string()));
        assert!(f.contains(&"carlosCARLOS".to_string()));
    }

    #[test]
    fn forms_of_empty_is_empty() {
        assert!(forms("", &LeetMap::default()).is_empty());
    }

    #[test]
    fn forms_follow_the_given_map() {
        let f = forms("Carlos", &LeetMap::from_pairs(&[('a', '@')]));
        assert!(f.contains(&"C@rlos".to_string()));
        assert!(!f.iter().any(|w| w.contains('4') || w.contains('0')));
    }
}
