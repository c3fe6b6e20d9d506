//! Profile-free expansion.
//!
//! Two ways to feed the transform library directly: a comma list of base
//! words with chosen forms, or an existing wordlist where every line gets the
//! full variant set. Both deduplicate across words and keep first-seen order.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use zeroize::Zeroize;

use crate::rules::RuleTable;
use crate::settings::Settings;
use crate::transform::{self, capitalize, reverse, truncate_left, upper};
use crate::unique::UniqueList;

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("wordlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid word form {0:?} (expected letters from `uclrs`)")]
    InvalidForm(char),
}

/// Which forms a base word is expanded into. The lower-case word is always
/// emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordForms {
    pub upper: bool,
    pub capitalized: bool,
    pub leet: bool,
    pub reverse: bool,
    /// Append every common suffix to the lower and capitalized word.
    pub common_suffixes: bool,
    /// Extra suffix appended to the lower (and capitalized) word.
    pub suffix: String,
}

impl Default for WordForms {
    fn default() -> Self {
        Self {
            upper: true,
            capitalized: true,
            leet: true,
            reverse: true,
            common_suffixes: true,
            suffix: String::new(),
        }
    }
}

impl WordForms {
    /// The form set as its `uclrs` letters.
    pub fn letters(&self) -> String {
        [
            (self.upper, 'u'),
            (self.capitalized, 'c'),
            (self.leet, 'l'),
            (self.reverse, 'r'),
            (self.common_suffixes, 's'),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, c)| *c)
        .collect()
    }
}

/// `u` upper, `c` capitalized, `l` leet, `r` reversed, `s` common suffixes.
/// Letters not given are switched off.
impl FromStr for WordForms {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut forms = WordForms {
            upper: false,
            capitalized: false,
            leet: false,
            reverse: false,
            common_suffixes: false,
            suffix: String::new(),
        };
        for c in s.trim().chars() {
            match c.to_ascii_lowercase() {
                'u' => forms.upper = true,
                'c' => forms.capitalized = true,
                'l' => forms.leet = true,
                'r' => forms.reverse = true,
                's' => forms.common_suffixes = true,
                other => return Err(WordlistError::InvalidForm(other)),
            }
        }
        Ok(forms)
    }
}

/// Split a comma list, dropping blanks.
pub fn split_words(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

/// Non-blank trimmed lines of `path`.
pub fn read_wordlist(path: &Path) -> Result<Vec<String>, WordlistError> {
    let io_err = |source: io::Error| WordlistError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(io_err)?);

    let mut words = Vec::new();
    for line in reader.lines() {
        let mut line = line.map_err(io_err)?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
        line.zeroize();
    }
    Ok(words)
}

/// Base words expanded into the chosen forms.
pub fn base_variants(words: &[String], forms: &WordForms, rules: &RuleTable) -> Vec<String> {
    let mut out = UniqueList::new();

    for base in words {
        let lower = base.trim().to_lowercase();
        if lower.is_empty() {
            continue;
        }
        let cap = capitalize(&lower);
        out.push(lower.clone());

        if forms.upper {
            out.push(upper(&lower));
        }
        if forms.capitalized {
            out.push(cap.clone());
        }
        if forms.leet {
            out.push(rules.leet.simple(&lower));
            if forms.capitalized {
                out.push(rules.leet.simple(&cap));
            }
        }
        if forms.reverse {
            out.push(reverse(&lower));
        }
        if !forms.suffix.is_empty() {
            out.push(format!("{lower}{}", forms.suffix));
            if forms.capitalized {
                out.push(format!("{cap}{}", forms.suffix));
            }
        }
        if forms.common_suffixes {
            for suffix in &rules.common_suffixes {
                out.push(format!("{lower}{suffix}"));
                out.push(format!("{cap}{suffix}"));
            }
        }
    }

    out.into_vec()
}

/// Every line of a wordlist through [`all_variants`], deduplicated across
/// lines.
pub fn expand_wordlist(words: &[String], rules: &RuleTable) -> Vec<String> {
    let mut out = UniqueList::new();
    for word in words {
        expand_into(word, rules, &mut out);
    }
    out.into_vec()
}

/// The full variant set of one word: every single-token form, the common
/// affixes, the variant-year sweep and short truncations.
pub fn all_variants(word: &str, rules: &RuleTable) -> Vec<String> {
    let mut out = UniqueList::new();
    expand_into(word, rules, &mut out);
    out.into_vec()
}

fn expand_into(word: &str, rules: &RuleTable, out: &mut UniqueList) {
    let lower = word.trim().to_lowercase();
    if lower.is_empty() {
        return;
    }
    out.extend(transform::forms(&lower, &rules.leet));

    let cap = capitalize(&lower);
    let up = upper(&lower);
    let leet = rules.leet.simple(&lower);
    let leet_cap = rules.leet.simple(&cap);

    for suffix in &rules.common_suffixes {
        for base in [&lower, &cap, &up, &leet, &leet_cap] {
            out.push(format!("{base}{suffix}"));
        }
    }
    for prefix in &rules.common_prefixes {
        out.push(format!("{prefix}{lower}"));
        out.push(format!("{prefix}{cap}"));
    }

    let (from, to) = rules.variant_years;
    for year in from..=to {
        let short = format!("{:02}", year % 100);
        for y in [year.to_string(), short] {
            out.push(format!("{lower}{y}"));
            out.push(format!("{cap}{y}"));
            out.push(format!("{leet}{y}"));
        }
    }

    for n in [3, 4, 5] {
        let trunc = truncate_left(&lower, n);
        if trunc != lower {
            out.push(trunc.clone());
            for suffix in &rules.common_suffixes {
                out.push(format!("{trunc}{suffix}"));
            }
        }
    }
}

/// Wordlist lines in their full variant set first, then base words in the
/// chosen forms, deduplicated together.
pub fn combined(
    lines: &[String],
    words: &[String],
    forms: &WordForms,
    rules: &RuleTable,
) -> Vec<String> {
    let mut out = UniqueList::new();
    out.extend(expand_wordlist(lines, rules));
    out.extend(base_variants(words, forms, rules));
    out.into_vec()
}

/// Apply the length window and ceiling of `settings`, in order.
pub fn admitted(words: Vec<String>, settings: &Settings) -> impl Iterator<Item = String> + '_ {
    words
        .into_iter()
        .filter(|w| settings.admits(w))
        .take(settings.ceiling().unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn comma_list() {
        assert_eq!(split_words(" carlos, perro,,boca ,"), strings(&["carlos", "perro", "boca"]));
        assert!(split_words(" , ").is_empty());
    }

    #[rstest]
    #[case("uclrs", "uclrs")]
    #[case("", "")]
    #[case("LR", "lr")]
    #[case("sscu", "ucs")]
    fn form_letters(#[case] raw: &str, #[case] letters: &str) {
        assert_eq!(raw.parse::<WordForms>().unwrap().letters(), letters);
    }

    #[test]
    fn unknown_form_letter() {
        assert!(matches!(
            "ux".parse::<WordForms>(),
            Err(WordlistError::InvalidForm('x'))
        ));
        assert_eq!(WordForms::default().letters(), "uclrs");
    }

    #[test]
    fn chosen_forms_only() {
        let rules = RuleTable::minimal();
        let forms = WordForms {
            suffix: "@empresa".into(),
            ..("lr".parse().unwrap())
        };
        let out = base_variants(&strings(&["Carlos"]), &forms, &rules);
        assert_eq!(out, strings(&["carlos", "c4r105", "solrac", "carlos@empresa"]));
    }

    #[test]
    fn every_form_with_common_suffixes() {
        let rules = RuleTable::minimal();
        let out = base_variants(&strings(&["boca", "Boca"]), &WordForms::default(), &rules);
        for expected in ["boca", "BOCA", "Boca", "80c4", "acob", "boca1", "Boca1"] {
            assert!(out.contains(&expected.to_string()), "missing {expected}");
        }
        let distinct: std::collections::HashSet<&String> = out.iter().collect();
        assert_eq!(distinct.len(), out.len());
    }

    #[test]
    fn wordlist_lines_expand_and_dedup() {
        let rules = RuleTable::minimal();
        let out = expand_wordlist(&strings(&["perro", "PERRO"]), &rules);
        assert_eq!(out, all_variants("perro", &rules));
        for expected in [
            "perro", "Perro", "p3rr0", "orrep", "perro1", "1perro", "perro2020", "perro20", "perr1",
        ] {
            assert!(out.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn lines_then_words_without_repeats() {
        let rules = RuleTable::minimal();
        let forms: WordForms = "c".parse().unwrap();
        let out = combined(&strings(&["boca"]), &strings(&["boca", "river"]), &forms, &rules);
        assert_eq!(out[0], "boca");
        assert_eq!(&out[out.len() - 2..], &["river", "River"]);
        assert_eq!(out.iter().filter(|w| *w == "Boca").count(), 1);
    }

    #[test]
    fn reads_trimmed_non_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  carlos \n\nboca\n   ").unwrap();
        assert_eq!(read_wordlist(file.path()).unwrap(), strings(&["carlos", "boca"]));
        assert!(matches!(
            read_wordlist(Path::new("/nonexistent/list.txt")),
            Err(WordlistError::Io { .. })
        ));
    }

    #[test]
    fn window_and_ceiling() {
        let settings = Settings {
            min_len: 4,
            max_len: 5,
            max_candidates: 2,
            ..Settings::default()
        };
        let words = strings(&["ab", "boca", "carlos", "perro", "luna"]);
        let out: Vec<String> = admitted(words, &settings).collect();
        assert_eq!(out, strings(&["boca", "perro"]));
    }
}
