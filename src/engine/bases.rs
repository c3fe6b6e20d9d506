//! Per-run values derived once from the profile and relatives.

use zeroize::Zeroize;

use super::Tables;
use crate::nickname;
use crate::profile::{Profile, Relative};
use crate::rules::short_year;
use crate::transform::{LeetMap, capitalize, upper};

/// The five casings every textual token is combined in.
#[derive(Debug, Clone, Default)]
pub(super) struct Word {
    pub lower: String,
    pub cap: String,
    pub upper: String,
    pub leet: String,
    pub leet_cap: String,
}

impl Word {
    pub fn new(raw: &str, leet: &LeetMap) -> Self {
        let lower = raw.trim().to_lowercase();
        let cap = capitalize(&lower);
        Self {
            upper: upper(&lower),
            leet: leet.simple(&lower),
            leet_cap: leet.simple(&cap),
            cap,
            lower,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub(super) struct RelativeBase {
    pub word: Word,
    pub year: String,
    pub short: String,
    pub sweeps_recent_years: bool,
    pub nicks: Vec<String>,
}

#[derive(Debug, Default)]
pub(super) struct Bases {
    pub profile: Profile,
    /// Textual atoms in extraction order.
    pub words: Vec<Word>,
    pub numeric: Vec<String>,
    pub name: Word,
    /// First letter of the given name, kept even when the name itself is too
    /// short to be an atom.
    pub initial: String,
    pub surname: Word,
    pub year: String,
    pub short: String,
    /// Date literals, most common layout first. Empty without a full date.
    pub dates: Vec<String>,
    pub nicks: Vec<String>,
    pub relatives: Vec<RelativeBase>,
    pub old_passwords: Vec<String>,
}

impl Bases {
    pub fn new(profile: &Profile, relatives: &[Relative], tables: &Tables) -> Self {
        let mut profile = profile.clone();
        profile.normalize();
        let leet = &tables.rules.leet;

        let initial: String = profile
            .name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default();
        for field in [
            &mut profile.name,
            &mut profile.surname,
            &mut profile.affiliation,
            &mut profile.city,
            &mut profile.pet,
            &mut profile.partner,
            &mut profile.age,
            &mut profile.document,
        ] {
            if !is_atom(field) {
                field.zeroize();
            }
        }

        let mut words = Vec::new();
        let mut numeric = Vec::new();
        for atom in profile.atoms() {
            if atom.is_textual() {
                words.push(Word::new(&atom.value, leet));
            } else {
                numeric.push(atom.value);
            }
        }

        let name = Word::new(&profile.name, leet);
        let nicks = if name.is_empty() {
            Vec::new()
        } else {
            nickname::resolve(&tables.nicknames, &name.lower)
        };

        let relatives = relatives
            .iter()
            .filter(|r| is_atom(&r.name))
            .map(|r| RelativeBase {
                word: Word::new(&r.name, leet),
                year: r.year.trim().to_string(),
                short: short_year(r.year.trim()).unwrap_or_default().to_string(),
                sweeps_recent_years: r.kind.sweeps_recent_years(),
                nicks: nickname::resolve(&tables.nicknames, &r.name),
            })
            .collect();

        let old_passwords = profile
            .old_passwords
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            words,
            numeric,
            surname: Word::new(&profile.surname, leet),
            year: profile.year.trim().to_string(),
            short: profile.short_year.trim().to_string(),
            dates: dates(&profile),
            name,
            initial,
            nicks,
            relatives,
            old_passwords,
            profile,
        }
    }

    pub fn has_year(&self) -> bool {
        !self.year.is_empty()
    }

    /// Nothing to build candidates from.
    pub fn is_empty(&self) -> bool {
        self.profile.is_empty() && self.relatives.is_empty()
    }
}

impl Drop for Bases {
    fn drop(&mut self) {
        self.profile.zeroize();
        self.old_passwords.zeroize();
        self.numeric.zeroize();
    }
}

/// Single characters carry no signal and are never combined.
fn is_atom(raw: &str) -> bool {
    raw.trim().chars().count() >= 2
}

/// Every date layout seen in leaked passwords.
fn dates(p: &Profile) -> Vec<String> {
    if !p.has_date() {
        return Vec::new();
    }
    let (d, m, y) = (p.day.trim(), p.month.trim(), p.year.trim());
    let yy = p.short_year.trim();
    vec![
        format!("{d}{m}{y}"),
        format!("{y}{m}{d}"),
        format!("{d}{m}{yy}"),
        format!("{d}{m}"),
        format!("{m}{y}"),
        format!("{m}{d}"),
        format!("{y}{d}{m}"),
        format!("{d}-{m}-{y}"),
        format!("{d}/{m}/{y}"),
        format!("{d}.{m}.{y}"),
        format!("{y}-{m}-{d}"),
    ]
}
