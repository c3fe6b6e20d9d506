//! Combinatorial expansion engine.
//!
//! [`Generator::candidates`] returns a lazy iterator over admitted
//! candidates. Calling it again restarts the run from scratch; nothing is
//! shared between runs. Admission trims each raw candidate, drops it when its
//! character count falls outside the configured window or when it was already
//! admitted, and stops the run once the ceiling is reached.

mod bases;
mod plan;
mod stages;

pub use plan::Stage;

use std::collections::HashSet;

use log::{debug, trace};
use zeroize::Zeroize;

use self::bases::Bases;
use self::plan::Step;
use self::stages::Batch;
use crate::ident::{RangeTable, Sweep};
use crate::locale::Locale;
use crate::nickname::NicknameBook;
use crate::profile::{Profile, Relative};
use crate::rules::RuleTable;
use crate::settings::Settings;

/// Static data the engine draws from. Built once, shared by every run.
#[derive(Debug, Clone)]
pub struct Tables {
    pub rules: RuleTable,
    pub locale: Locale,
    pub nicknames: NicknameBook,
    pub ranges: RangeTable,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            rules: RuleTable::default(),
            locale: Locale::rioplatense(),
            nicknames: NicknameBook::spanish(),
            ranges: RangeTable::argentina(),
        }
    }
}

impl Tables {
    /// One entry per affix table, no locale vocabulary, no dictionary.
    pub fn minimal() -> Self {
        Self {
            rules: RuleTable::minimal(),
            locale: Locale::neutral(),
            nicknames: NicknameBook::empty(),
            ranges: RangeTable::argentina(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    tables: Tables,
    settings: Settings,
}

impl Generator {
    pub fn new(tables: Tables, settings: &Settings) -> Self {
        Self {
            tables,
            settings: settings.clone(),
        }
    }

    pub fn candidates(&self, profile: &Profile, relatives: &[Relative]) -> Candidates<'_> {
        let bases = Bases::new(profile, relatives, &self.tables);
        let plan = plan::build(&bases, &self.settings);
        debug!(
            "{} textual atoms, {} numeric atoms, {} relatives, {} steps",
            bases.words.len(),
            bases.numeric.len(),
            bases.relatives.len(),
            plan.len()
        );

        Candidates {
            generator: self,
            bases,
            plan,
            next_step: 0,
            batch: Batch::default(),
            sweep: None,
            seen: HashSet::new(),
            admitted: 0,
            stage: None,
            done: false,
        }
    }

    /// Run to completion and collect every admitted candidate.
    pub fn generate(&self, profile: &Profile, relatives: &[Relative]) -> Vec<String> {
        self.candidates(profile, relatives).collect()
    }
}

/// One generation run.
pub struct Candidates<'a> {
    generator: &'a Generator,
    bases: Bases,
    plan: Vec<Step>,
    next_step: usize,
    batch: Batch,
    sweep: Option<Sweep>,
    seen: HashSet<String>,
    admitted: usize,
    /// Stage being expanded and the admission count when it began.
    stage: Option<(Stage, usize)>,
    done: bool,
}

impl Candidates<'_> {
    /// Candidates admitted so far.
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    fn raw_next(&mut self) -> Option<String> {
        loop {
            if let Some(s) = self.batch.pop() {
                return Some(s);
            }
            if let Some(sweep) = self.sweep.as_mut() {
                match sweep.next() {
                    Some(s) => return Some(s),
                    None => self.sweep = None,
                }
            }

            let step = *self.plan.get(self.next_step)?;
            self.next_step += 1;
            self.advance(step);
        }
    }

    fn advance(&mut self, step: Step) {
        let generator = self.generator;
        let settings = &generator.settings;
        match step {
            Step::Begin(stage) => {
                self.finish_stage();
                self.stage = Some((stage, self.admitted));
            }
            Step::DocSweep => {
                self.sweep =
                    stages::doc_sweep(&self.bases, &generator.tables, settings.doc_sweep_step);
            }
            step => stages::run(
                step,
                &self.bases,
                &generator.tables,
                settings.pair_cap,
                &mut self.batch,
            ),
        }
    }

    fn finish_stage(&mut self) {
        if let Some((stage, start)) = self.stage.take() {
            debug!("stage {stage}: {} admitted", self.admitted - start);
        }
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            self.finish_stage();
            debug!("{} candidates", self.admitted);
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if let Some(max) = self.generator.settings.ceiling()
            && self.admitted >= max
        {
            debug!("ceiling of {max} candidates reached");
            self.finish();
            return None;
        }

        loop {
            let Some(mut raw) = self.raw_next() else {
                self.finish();
                return None;
            };
            let candidate = raw.trim();
            if !self.generator.settings.admits(candidate) || self.seen.contains(candidate) {
                trace!("skip {candidate:?}");
                raw.zeroize();
                continue;
            }
            let candidate = candidate.to_string();
            raw.zeroize();
            self.seen.insert(candidate.clone());
            self.admitted += 1;
            return Some(candidate);
        }
    }
}

impl Drop for Candidates<'_> {
    fn drop(&mut self) {
        for mut s in self.seen.drain() {
            s.zeroize();
        }
        for mut s in self.batch.drain() {
            s.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carlos() -> Profile {
        let mut p = Profile {
            name: "Carlos".into(),
            ..Default::default()
        };
        p.set_year("1990");
        p
    }

    #[test]
    fn carlos_scenario() {
        let g = Generator::new(Tables::default(), &Settings::default());
        let out = g.generate(&carlos(), &[]);
        for expected in ["carlos1990", "Carlos1990", "1990carlos", "carlos90", "carlos19901990"] {
            assert!(out.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(out.iter().all(|c| (4..=28).contains(&c.chars().count())));
    }

    #[test]
    fn empty_profile_yields_nothing() {
        let g = Generator::new(Tables::default(), &Settings::default());
        assert_eq!(g.candidates(&Profile::default(), &[]).count(), 0);
    }

    #[test]
    fn ceiling_stops_the_run() {
        let settings = Settings {
            max_candidates: 25,
            ..Settings::default()
        };
        let g = Generator::new(Tables::default(), &settings);
        let mut run = g.candidates(&carlos(), &[]);
        assert_eq!(run.by_ref().count(), 25);
        assert_eq!(run.admitted(), 25);
        assert_eq!(run.next(), None);
    }

    #[test]
    fn restart_gives_the_same_sequence() {
        let g = Generator::new(Tables::minimal(), &Settings::default());
        let first: Vec<String> = g.candidates(&carlos(), &[]).take(200).collect();
        let second: Vec<String> = g.candidates(&carlos(), &[]).take(200).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn length_window_is_applied() {
        let settings = Settings {
            min_len: 8,
            max_len: 10,
            ..Settings::default()
        };
        let g = Generator::new(Tables::minimal(), &settings);
        let out = g.generate(&carlos(), &[]);
        assert!(!out.is_empty());
        assert!(out.iter().all(|c| (8..=10).contains(&c.chars().count())));
        assert!(!out.contains(&"carlos".to_string()));
    }

    #[test]
    fn single_character_fields_drive_nothing() {
        let g = Generator::new(Tables::default(), &Settings::default());
        let lone = Profile {
            name: "x".into(),
            ..Default::default()
        };
        assert_eq!(g.candidates(&lone, &[]).count(), 0);

        let rels = vec!["y:hijo".parse().unwrap()];
        assert_eq!(g.candidates(&Profile::default(), &rels).count(), 0);

        let with_surname = Profile {
            name: "x".into(),
            surname: "Perez".into(),
            ..Default::default()
        };
        let out = g.generate(&with_surname, &[]);
        assert!(out.contains(&"xperez".to_string()));
        assert!(!out.iter().any(|c| c.starts_with("xito") || c.starts_with("Xito")));
    }

    #[test]
    fn injected_leet_map_reaches_every_stage() {
        let mut tables = Tables::default();
        tables.rules.leet = crate::transform::LeetMap::from_pairs(&[('a', '@')]);
        let settings = Settings {
            full_nicknames: true,
            ..Settings::default()
        };
        let g = Generator::new(tables, &settings);
        let out = g.generate(&carlos(), &[]);
        assert!(out.contains(&"C@rlos".to_string()));
        for canonical in ["c4r105", "C4r105", "c4rlos", "C4rl0s"] {
            assert!(!out.contains(&canonical.to_string()), "leaked {canonical}");
        }
    }

    #[test]
    fn sweep_runs_only_without_document() {
        let settings = Settings {
            doc_sweep_step: 5_000_000,
            locale: false,
            ..Settings::default()
        };
        let g = Generator::new(Tables::minimal(), &settings);
        let out = g.generate(&carlos(), &[]);
        assert!(out.contains(&"38000000".to_string()));
        assert!(out.contains(&"carlos43.000.000".to_string()));

        let mut with_doc = carlos();
        with_doc.document = "40111222".into();
        let out = g.generate(&with_doc, &[]);
        assert!(out.contains(&"40.111.222".to_string()));
        assert!(!out.contains(&"38000000".to_string()));
    }
}
