//! Locale pattern library.
//!
//! Habits that generic affix tables miss: doubled years ("juan19901990"),
//! stretched endings ("carlosss", "vicky!!!"), club names and local slang.

mod catalog;

use crate::profile::Profile;
use crate::rules::short_year;
use crate::transform::capitalize;
use crate::unique::UniqueList;

/// Vocabulary and idioms of one locale. All collections are ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    pub phrases: Vec<String>,
    pub clubs: Vec<String>,
    pub jersey_numbers: Vec<String>,
    /// Years for the "current year doubled" idiom.
    pub recent_years: Vec<String>,
    /// Composite identifier prefix codes.
    pub id_prefixes: Vec<String>,
}

impl Locale {
    /// Argentina and Uruguay.
    pub fn rioplatense() -> Self {
        Self {
            phrases: strings(catalog::PHRASES),
            clubs: strings(catalog::CLUBS),
            jersey_numbers: strings(catalog::JERSEY_NUMBERS),
            recent_years: strings(catalog::RECENT_YEARS),
            id_prefixes: strings(catalog::ID_PREFIXES),
        }
    }

    /// No vocabulary. Repetition idioms and letter duplication still apply.
    pub fn neutral() -> Self {
        Self {
            recent_years: strings(catalog::RECENT_YEARS),
            ..Self::default()
        }
    }

    /// Year repetition idioms for `token`. Either year may be empty.
    pub fn repeat_patterns(&self, token: &str, year: &str, short: &str) -> Vec<String> {
        if token.is_empty() {
            return Vec::new();
        }

        let mut out = UniqueList::new();
        if !year.is_empty() {
            out.push(format!("{token}{year}{year}"));
            out.push(format!("{token}{year}.{year}"));
            out.push(format!("{token}{year}_{year}"));
        }
        if !short.is_empty() {
            out.push(format!("{token}{short}{short}"));
            out.push(format!("{token}{short}.{short}"));
        }
        if !year.is_empty() && !short.is_empty() {
            out.push(format!("{token}{year}{short}"));
            out.push(format!("{token}{short}{year}"));
        }
        for recent in &self.recent_years {
            out.push(format!("{token}{recent}{recent}"));
            if let Some(yy) = short_year(recent) {
                out.push(format!("{token}{yy}{yy}"));
            }
        }
        out.into_vec()
    }

    /// Everything this locale adds for `profile`.
    pub fn contributions(&self, profile: &Profile) -> Vec<String> {
        let n = profile.name.trim().to_lowercase();
        let nc = capitalize(&n);
        let a = profile.surname.trim().to_lowercase();
        let ac = capitalize(&a);
        let year = profile.year.trim();
        let short = profile.short_year.trim();

        let mut out = UniqueList::new();

        for phrase in &self.phrases {
            out.push(phrase.clone());
            if !n.is_empty() {
                out.extend([
                    format!("{n}{phrase}"),
                    format!("{nc}{phrase}"),
                    format!("{phrase}{n}"),
                    format!("{phrase}{nc}"),
                ]);
            }
            if !year.is_empty() {
                out.push(format!("{phrase}{year}"));
                out.push(format!("{phrase}{short}"));
            }
        }

        for club in &self.clubs {
            let cc = capitalize(club);
            out.push(club.clone());
            out.push(cc.clone());
            if !year.is_empty() {
                out.push(format!("{club}{year}"));
                out.push(format!("{cc}{year}"));
                out.push(format!("{club}{short}"));
            }
            if !n.is_empty() {
                out.push(format!("{n}{club}"));
                out.push(format!("{club}{n}"));
                out.push(format!("{nc}{cc}"));
            }
            for number in &self.jersey_numbers {
                out.push(format!("{club}{number}"));
            }
        }

        if !year.is_empty() {
            let team = profile.affiliation.trim().to_lowercase();
            let tc = capitalize(&team);
            for token in [&n, &nc, &a, &ac, &team, &tc] {
                out.extend(self.repeat_patterns(token, year, short));
            }
        }

        for token in [&n, &nc, &a, &ac] {
            out.extend(letter_duplication(token));
        }

        out.into_vec()
    }
}

/// Stretched endings and the `q`-for-`c`/`k` swap.
pub fn letter_duplication(token: &str) -> Vec<String> {
    let Some(last) = token.chars().last() else {
        return Vec::new();
    };

    let mut out = UniqueList::new();
    out.push(format!("{token}{last}"));
    out.push(format!("{token}{last}{last}"));
    out.push(format!("{token}..."));
    out.push(format!("{token}!!!"));
    out.push(format!("{token}???"));

    let mut chars = token.chars();
    if let Some('c' | 'k') = chars.next() {
        out.push(format!("q{}", chars.as_str()));
    }
    out.into_vec()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(list: &[String], s: &str) -> bool {
        list.iter().any(|x| x == s)
    }

    #[test]
    fn repeat_patterns_double_the_year() {
        let p = Locale::rioplatense().repeat_patterns("juan", "1990", "90");
        for expected in [
            "juan19901990",
            "juan1990.1990",
            "juan1990_1990",
            "juan9090",
            "juan90.90",
            "juan199090",
            "juan901990",
            "juan20242024",
            "juan2424",
        ] {
            assert!(has(&p, expected), "missing {expected}");
        }
    }

    #[test]
    fn repeat_patterns_without_birth_year_use_recent_years_only() {
        let p = Locale::neutral().repeat_patterns("juan", "", "");
        assert_eq!(p.len(), 6);
        assert_eq!(&p[..2], &["juan20232023", "juan2323"]);
        assert!(Locale::neutral().repeat_patterns("", "1990", "90").is_empty());
    }

    #[test]
    fn letter_duplication_patterns() {
        assert_eq!(
            letter_duplication("carlos"),
            vec!["carloss", "carlosss", "carlos...", "carlos!!!", "carlos???", "qarlos"]
        );
        assert!(!has(&letter_duplication("ana"), "qna"));
        assert!(letter_duplication("").is_empty());
    }

    #[test]
    fn contributions_mix_name_year_and_clubs() {
        let profile = Profile {
            name: "Carlos".into(),
            surname: "Perez".into(),
            affiliation: "Boca".into(),
            ..Default::default()
        }
        .with_birth_date("15031990");
        let c = Locale::rioplatense().contributions(&profile);
        for expected in [
            "carlosamor",
            "Carlosmiamor",
            "amor1990",
            "river90",
            "CarlosRiver",
            "boca10",
            "Boca19901990",
            "perez9090",
            "Perezzz",
        ] {
            assert!(has(&c, expected), "missing {expected}");
        }
    }

    #[test]
    fn neutral_locale_skips_vocabulary() {
        let profile = Profile {
            name: "carlos".into(),
            ..Default::default()
        };
        let c = Locale::neutral().contributions(&profile);
        assert!(!has(&c, "boca"));
        assert!(has(&c, "carlos!!!"));
    }
}
