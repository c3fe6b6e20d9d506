//! Generation plan.
//!
//! A run is a flat list of small steps decided up front from which profile
//! fields are present. Each step expands into a bounded batch of candidates,
//! so the iterator only ever buffers one batch.

use std::fmt;

use super::bases::Bases;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Atoms,
    Affixes,
    Pairs,
    Year,
    Date,
    Nicknames,
    Relatives,
    Locale,
    Document,
    OldPasswords,
    Extras,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Atoms => "atoms",
            Self::Affixes => "affixes",
            Self::Pairs => "pairs",
            Self::Year => "year",
            Self::Date => "date",
            Self::Nicknames => "nicknames",
            Self::Relatives => "relatives",
            Self::Locale => "locale",
            Self::Document => "document",
            Self::OldPasswords => "old passwords",
            Self::Extras => "extras",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    Begin(Stage),
    /// Casings, reversals and leet variants of one textual atom.
    Word(usize),
    Numeric,
    Affixes(usize),
    /// Word `i` joined with every other word.
    Pair(usize),
    Year(usize),
    YearOnly,
    DateAlone,
    DateWith(usize),
    Nick(usize),
    NickFull,
    Relative(usize),
    RelativePairs(usize),
    RelativeNicks(usize),
    Locale,
    DocKnown,
    DocComposite,
    DocCross(usize),
    DocSweep,
    OldPassword(usize),
    InitialSurname,
    Keywords(usize),
    Keyboard,
    LeetName,
}

pub(super) fn build(bases: &Bases, settings: &Settings) -> Vec<Step> {
    let mut plan = Vec::new();
    if bases.is_empty() {
        return plan;
    }

    let words = 0..bases.words.len();
    let has_words = !bases.words.is_empty();

    if has_words || !bases.numeric.is_empty() {
        plan.push(Step::Begin(Stage::Atoms));
        plan.extend(words.clone().map(Step::Word));
        if !bases.numeric.is_empty() {
            plan.push(Step::Numeric);
        }
    }

    if has_words {
        plan.push(Step::Begin(Stage::Affixes));
        plan.extend(words.clone().map(Step::Affixes));
    }

    if bases.words.len() > 1 {
        plan.push(Step::Begin(Stage::Pairs));
        plan.extend(words.clone().map(Step::Pair));
    }

    if bases.has_year() {
        plan.push(Step::Begin(Stage::Year));
        plan.extend(words.clone().map(Step::Year));
        plan.push(Step::YearOnly);
    }

    if !bases.dates.is_empty() {
        plan.push(Step::Begin(Stage::Date));
        plan.push(Step::DateAlone);
        plan.extend(words.clone().map(Step::DateWith));
    }

    if !bases.nicks.is_empty() {
        plan.push(Step::Begin(Stage::Nicknames));
        plan.extend((0..bases.nicks.len()).map(Step::Nick));
        if settings.full_nicknames {
            plan.push(Step::NickFull);
        }
    }

    if !bases.relatives.is_empty() {
        plan.push(Step::Begin(Stage::Relatives));
        for r in 0..bases.relatives.len() {
            plan.push(Step::Relative(r));
            if r < settings.pair_cap {
                plan.push(Step::RelativePairs(r));
            }
            plan.push(Step::RelativeNicks(r));
        }
    }

    let profile = &bases.profile;

    if settings.locale && !profile.is_empty() {
        plan.push(Step::Begin(Stage::Locale));
        plan.push(Step::Locale);
    }

    if !profile.document.trim().is_empty() {
        plan.push(Step::Begin(Stage::Document));
        plan.push(Step::DocKnown);
        plan.push(Step::DocComposite);
        plan.extend(words.clone().map(Step::DocCross));
    } else if settings.doc_sweep_step > 0 && bases.year.parse::<u32>().is_ok() {
        plan.push(Step::Begin(Stage::Document));
        plan.push(Step::DocSweep);
    }

    if !bases.old_passwords.is_empty() {
        plan.push(Step::Begin(Stage::OldPasswords));
        plan.extend((0..bases.old_passwords.len()).map(Step::OldPassword));
    }

    if !profile.is_empty() {
        plan.push(Step::Begin(Stage::Extras));
        if !bases.initial.is_empty() && !bases.surname.is_empty() {
            plan.push(Step::InitialSurname);
        }
        plan.extend(words.map(Step::Keywords));
        plan.push(Step::Keyboard);
        if !bases.name.is_empty() {
            plan.push(Step::LeetName);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Tables;
    use crate::profile::{Profile, Relative};

    fn plan_for(profile: Profile, relatives: &[Relative], settings: &Settings) -> Vec<Step> {
        let bases = Bases::new(&profile, relatives, &Tables::minimal());
        build(&bases, settings)
    }

    #[test]
    fn empty_profile_has_empty_plan() {
        assert!(plan_for(Profile::default(), &[], &Settings::default()).is_empty());
    }

    #[test]
    fn stages_follow_present_fields() {
        let p = Profile {
            name: "carlos".into(),
            ..Default::default()
        };
        let plan = plan_for(p, &[], &Settings::default());
        assert!(plan.contains(&Step::Word(0)));
        assert!(plan.contains(&Step::Begin(Stage::Nicknames)));
        assert!(!plan.contains(&Step::Begin(Stage::Pairs)));
        assert!(!plan.contains(&Step::Begin(Stage::Year)));
        assert!(!plan.contains(&Step::Begin(Stage::Document)));
    }

    #[test]
    fn exact_document_supersedes_sweep() {
        let settings = Settings {
            doc_sweep_step: 1_000,
            ..Settings::default()
        };
        let with_doc = Profile {
            document: "30123456".into(),
            year: "1990".into(),
            ..Default::default()
        };
        let plan = plan_for(with_doc, &[], &settings);
        assert!(plan.contains(&Step::DocKnown));
        assert!(!plan.contains(&Step::DocSweep));

        let without_doc = Profile {
            year: "1990".into(),
            ..Default::default()
        };
        assert!(plan_for(without_doc, &[], &settings).contains(&Step::DocSweep));
    }

    #[test]
    fn relative_pairs_are_capped() {
        let settings = Settings {
            pair_cap: 1,
            ..Settings::default()
        };
        let rels: Vec<Relative> = ["ana", "luz", "boby"]
            .iter()
            .map(|n| n.parse().unwrap())
            .collect();
        let plan = plan_for(Profile::default(), &rels, &settings);
        assert!(plan.contains(&Step::RelativePairs(0)));
        assert!(!plan.contains(&Step::RelativePairs(1)));
        assert!(plan.contains(&Step::Relative(2)));
        assert!(!plan.contains(&Step::Begin(Stage::Extras)));
    }
}
