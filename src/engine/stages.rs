//! Step expansion.
//!
//! Every function here appends raw candidates to a batch. Length checks and
//! deduplication happen on the way out, in the iterator.

use std::collections::VecDeque;

use log::debug;

use super::Tables;
use super::bases::{Bases, RelativeBase, Word};
use super::plan::Step;
use crate::ident;
use crate::nickname;
use crate::transform::{FULL_LEET_CAP, SEPARATORS, capitalize, forms, reverse, upper};

/// Candidates produced by one step, in emission order.
#[derive(Debug, Default)]
pub(super) struct Batch(VecDeque<String>);

impl Batch {
    pub fn add(&mut self, s: impl Into<String>) {
        self.0.push_back(s.into());
    }

    pub fn add_all<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(items.into_iter().map(Into::into));
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop_front()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.0.drain(..)
    }
}

/// Separators used between a pair and a trailing year.
const PAIR_YEAR_SEPARATORS: &[&str] = &[".", "_", "-"];
/// Endings after `nickname + surname`.
const NAME_SURNAME_SUFFIXES: &[&str] = &["!", "1", "123", "@"];
const RELATIVE_NICK_NUMBERS: &[&str] = &["1", "12", "123", "0", "00"];
const RELATIVE_NICK_SYMBOLS: &[&str] = &["!", "!!", "@", "."];
const RELATIVE_YEAR_SUFFIXES: &[&str] = &["!", "@", "#", ".", "1", "123"];

pub(super) fn run(step: Step, bases: &Bases, tables: &Tables, pair_cap: usize, out: &mut Batch) {
    match step {
        Step::Begin(_) | Step::DocSweep => {}
        Step::Word(i) => word(&bases.words[i], tables, out),
        Step::Numeric => out.add_all(bases.numeric.iter().cloned()),
        Step::Affixes(i) => affixes(&bases.words[i], tables, out),
        Step::Pair(i) => pair(bases, i, tables, out),
        Step::Year(i) => year(&bases.words[i], bases, tables, out),
        Step::YearOnly => year_only(bases, tables, out),
        Step::DateAlone => date_alone(bases, tables, out),
        Step::DateWith(i) => date_with(&bases.words[i], bases, tables, out),
        Step::Nick(i) => nick(&bases.nicks[i], bases, tables, out),
        Step::NickFull => nick_full(bases, tables, out),
        Step::Relative(r) => relative(&bases.relatives[r], bases, tables, out),
        Step::RelativePairs(r) => relative_pairs(r, bases, pair_cap, out),
        Step::RelativeNicks(r) => relative_nicks(&bases.relatives[r], bases, tables, out),
        Step::Locale => out.add_all(tables.locale.contributions(&bases.profile)),
        Step::DocKnown => doc_known(bases, tables, out),
        Step::DocComposite => out.add_all(ident::composite_ids(
            &bases.profile.document,
            &tables.locale.id_prefixes,
        )),
        Step::DocCross(i) => doc_cross(&bases.words[i], bases, tables, out),
        Step::OldPassword(i) => old_password(&bases.old_passwords[i], bases, tables, out),
        Step::InitialSurname => initial_surname(bases, tables, out),
        Step::Keywords(i) => keywords(&bases.words[i], tables, out),
        Step::Keyboard => keyboard(bases, tables, out),
        Step::LeetName => leet_name(bases, tables, out),
    }
}

fn nick_full(bases: &Bases, tables: &Tables, out: &mut Batch) {
    out.add_all(nickname::full_variants(
        &tables.nicknames,
        &tables.rules,
        &bases.name.lower,
    ));
}

fn word(w: &Word, tables: &Tables, out: &mut Batch) {
    out.add(w.lower.clone());
    out.add(w.cap.clone());
    out.add(w.upper.clone());
    out.add(w.leet.clone());
    out.add(w.leet_cap.clone());
    out.add(reverse(&w.lower));
    out.add(reverse(&w.cap));

    for variant in tables.rules.leet.full(&w.lower) {
        out.add(capitalize(&variant));
        out.add(variant);
    }
    out.add_all(forms(&w.lower, &tables.rules.leet));
}

fn affixes(w: &Word, tables: &Tables, out: &mut Batch) {
    let rules = &tables.rules;
    let (lo, cap) = (&w.lower, &w.cap);

    for num in &rules.num_suffixes {
        out.add(format!("{lo}{num}"));
        out.add(format!("{cap}{num}"));
        if w.leet != w.lower {
            out.add(format!("{}{num}", w.leet));
        }
    }
    for sp in rules.special_suffixes.iter().chain(&rules.num_symbol_suffixes) {
        out.add(format!("{lo}{sp}"));
        out.add(format!("{cap}{sp}"));
    }
    for pre in rules.num_prefixes.iter().chain(&rules.special_prefixes) {
        out.add(format!("{pre}{lo}"));
        out.add(format!("{pre}{cap}"));
    }
    for num in &rules.sandwich_numbers {
        out.add(format!("{num}{lo}{num}"));
        out.add(format!("{num}{cap}{num}"));
    }
    out.add(format!("{lo}{lo}"));
    out.add(format!("{cap}{lo}"));
    out.add(format!("{cap}{cap}"));
}

/// Word `i` against every other word. The pairwise stage is the quadratic
/// term of a run: n words give n·(n-1) ordered pairs.
fn pair(bases: &Bases, i: usize, tables: &Tables, out: &mut Batch) {
    let a = &bases.words[i];
    let (y, yy) = (&bases.year, &bases.short);

    for (j, b) in bases.words.iter().enumerate() {
        if i == j {
            continue;
        }
        out.add(format!("{}{}", a.lower, b.lower));
        out.add(format!("{}{}", a.cap, b.cap));
        out.add(format!("{}{}", a.cap, b.lower));
        out.add(format!("{}{}", a.lower, b.cap));

        for sep in SEPARATORS {
            out.add(format!("{}{sep}{}", a.lower, b.lower));
            out.add(format!("{}{sep}{}", a.cap, b.cap));
            out.add(format!("{}{sep}{}", a.cap, b.lower));
        }

        if bases.has_year() {
            out.add(format!("{}{}{y}", a.lower, b.lower));
            out.add(format!("{}{}{y}", a.cap, b.cap));
            out.add(format!("{}{}{yy}", a.cap, b.cap));
            for sep in PAIR_YEAR_SEPARATORS {
                out.add(format!("{}{sep}{}{sep}{y}", a.cap, b.cap));
            }
        }

        for sp in &tables.rules.combo_suffixes {
            out.add(format!("{}{}{sp}", a.lower, b.lower));
            out.add(format!("{}{}{sp}", a.cap, b.cap));
        }
    }
}

fn year(w: &Word, bases: &Bases, tables: &Tables, out: &mut Batch) {
    let rules = &tables.rules;
    let (y, yy) = (&bases.year, &bases.short);
    let (lo, cap) = (&w.lower, &w.cap);

    out.add(format!("{lo}{y}"));
    out.add(format!("{cap}{y}"));
    out.add(format!("{}{y}", w.upper));
    out.add(format!("{}{y}", w.leet));
    out.add(format!("{}{y}", w.leet_cap));
    out.add(format!("{y}{lo}"));
    out.add(format!("{y}{cap}"));
    if !yy.is_empty() {
        out.add(format!("{lo}{yy}"));
        out.add(format!("{cap}{yy}"));
        out.add(format!("{yy}{lo}"));
        out.add(format!("{yy}{cap}"));
    }

    for sp in &rules.special_suffixes {
        out.add(format!("{lo}{y}{sp}"));
        out.add(format!("{cap}{y}{sp}"));
        if !yy.is_empty() {
            out.add(format!("{lo}{yy}{sp}"));
            out.add(format!("{cap}{yy}{sp}"));
        }
    }
    for num in &rules.year_number_suffixes {
        out.add(format!("{lo}{y}{num}"));
        out.add(format!("{cap}{y}{num}"));
    }

    out.add(format!("{y}{lo}{y}"));
    if !yy.is_empty() {
        out.add(format!("{yy}{lo}{yy}"));
    }
    out.add(format!("{y}{cap}{y}"));

    out.add(format!("{lo}{y}{y}"));
    out.add(format!("{cap}{y}{y}"));
    if !yy.is_empty() {
        out.add(format!("{lo}{yy}{yy}"));
    }

    for sep in SEPARATORS {
        out.add(format!("{lo}{sep}{y}"));
        out.add(format!("{cap}{sep}{y}"));
        if !yy.is_empty() {
            out.add(format!("{lo}{sep}{yy}"));
            out.add(format!("{cap}{sep}{yy}"));
        }
        out.add(format!("{y}{sep}{lo}"));
        out.add(format!("{y}{sep}{cap}"));
    }

    // Prefix, sandwich and doubled layouts with a trailing symbol.
    let mut layouts = Vec::with_capacity(12);
    for base in [lo, cap] {
        layouts.push(format!("{y}{base}"));
        layouts.push(format!("{y}{base}{y}"));
        layouts.push(format!("{base}{y}{y}"));
        if !yy.is_empty() {
            layouts.push(format!("{yy}{base}"));
            layouts.push(format!("{yy}{base}{yy}"));
            layouts.push(format!("{base}{yy}{yy}"));
        }
    }
    for layout in &layouts {
        for sp in &rules.special_suffixes {
            out.add(format!("{layout}{sp}"));
        }
    }
}

fn year_only(bases: &Bases, tables: &Tables, out: &mut Batch) {
    let (y, yy) = (&bases.year, &bases.short);
    out.add(format!("{y}{y}"));
    if !yy.is_empty() {
        out.add(format!("{yy}{yy}"));
        out.add(format!("{y}{yy}"));
    }
    for sp in &tables.rules.special_suffixes {
        out.add(format!("{y}{sp}"));
        if !yy.is_empty() {
            out.add(format!("{yy}{sp}"));
        }
    }
}

fn date_alone(bases: &Bases, tables: &Tables, out: &mut Batch) {
    for date in &bases.dates {
        out.add(date.clone());
        for sp in &tables.rules.special_suffixes {
            out.add(format!("{date}{sp}"));
        }
    }
}

fn date_with(w: &Word, bases: &Bases, tables: &Tables, out: &mut Batch) {
    let (lo, cap) = (&w.lower, &w.cap);
    for date in &bases.dates {
        out.add(format!("{lo}{date}"));
        out.add(format!("{cap}{date}"));
        out.add(format!("{date}{lo}"));
        out.add(format!("{date}{cap}"));
        for sp in &tables.rules.date_suffixes {
            out.add(format!("{lo}{date}{sp}"));
            out.add(format!("{cap}{date}{sp}"));
        }
    }
}

fn nick(nick: &str, bases: &Bases, tables: &Tables, out: &mut Batch) {
    let rules = &tables.rules;
    let nc = capitalize(nick);
    let leet = rules.leet.simple(nick);
    let (y, yy) = (&bases.year, &bases.short);

    out.add(nick);
    out.add(nc.clone());
    if leet != nick {
        out.add(leet);
    }

    for sfx in rules
        .num_suffixes
        .iter()
        .chain(&rules.special_suffixes)
        .chain(&rules.num_symbol_suffixes)
    {
        out.add(format!("{nick}{sfx}"));
        out.add(format!("{nc}{sfx}"));
    }

    if bases.has_year() {
        out.add(format!("{nick}{y}"));
        out.add(format!("{nc}{y}"));
        if !yy.is_empty() {
            out.add(format!("{nick}{yy}"));
            out.add(format!("{nc}{yy}"));
        }
        out.add(format!("{y}{nick}"));
        out.add(format!("{y}{nc}"));
        out.add(format!("{nick}{y}{y}"));
        out.add(format!("{y}{nick}{y}"));
        for sp in &rules.special_suffixes {
            out.add(format!("{nick}{y}{sp}"));
            out.add(format!("{nc}{y}{sp}"));
        }
    }

    let surname = &bases.surname;
    if !surname.is_empty() {
        let (a, ac) = (&surname.lower, &surname.cap);
        out.add(format!("{nick}{a}"));
        out.add(format!("{nc}{ac}"));
        out.add(format!("{nick}_{a}"));
        out.add(format!("{nick}.{a}"));
        if bases.has_year() {
            out.add(format!("{nick}{a}{y}"));
            out.add(format!("{nc}{ac}{y}"));
        }
        for sp in NAME_SURNAME_SUFFIXES {
            out.add(format!("{nick}{a}{sp}"));
            out.add(format!("{nc}{ac}{sp}"));
        }
    }
}

fn relative(rel: &RelativeBase, bases: &Bases, tables: &Tables, out: &mut Batch) {
    let rules = &tables.rules;
    let w = &rel.word;
    let (rn, rnc) = (&w.lower, &w.cap);

    out.add(rn.clone());
    out.add(rnc.clone());
    out.add(w.upper.clone());
    out.add(w.leet.clone());
    out.add(reverse(rn));

    for num in &rules.short_num_suffixes {
        out.add(format!("{rn}{num}"));
        out.add(format!("{rnc}{num}"));
    }
    for sp in &rules.short_special_suffixes {
        out.add(format!("{rn}{sp}"));
        out.add(format!("{rnc}{sp}"));
    }

    let (ay, ays) = (&rel.year, &rel.short);
    if !ay.is_empty() {
        out.add(format!("{rn}{ay}"));
        out.add(format!("{rnc}{ay}"));
        out.add(format!("{}{ay}", w.upper));
        out.add(format!("{}{ay}", w.leet));
        out.add(format!("{ay}{rn}"));
        out.add(format!("{ay}{rnc}"));
        if !ays.is_empty() {
            out.add(format!("{rn}{ays}"));
            out.add(format!("{rnc}{ays}"));
            out.add(format!("{ays}{rn}"));
        }
        for sp in RELATIVE_YEAR_SUFFIXES {
            out.add(format!("{rn}{ay}{sp}"));
            out.add(format!("{rnc}{ay}{sp}"));
            if !ays.is_empty() {
                out.add(format!("{rn}{ays}{sp}"));
                out.add(format!("{rnc}{ays}{sp}"));
            }
        }
        out.add(format!("{ay}{rn}{ay}"));
        if !ays.is_empty() {
            out.add(format!("{ays}{rn}{ays}"));
        }
    }

    if rel.sweeps_recent_years {
        for y in &rules.recent_years {
            out.add(format!("{rn}{y}"));
            out.add(format!("{rnc}{y}"));
            out.add(format!("{y}{rn}"));
        }
        for yy in rules.recent_short_years() {
            out.add(format!("{rn}{yy}"));
            out.add(format!("{rnc}{yy}"));
        }
    }

    let y = &bases.year;
    let name = &bases.name;
    if !name.is_empty() {
        let (no, noc) = (&name.lower, &name.cap);
        out.add(format!("{no}{rn}"));
        out.add(format!("{rn}{no}"));
        out.add(format!("{noc}{rnc}"));
        out.add(format!("{rnc}{noc}"));
        out.add(format!("{no}_{rn}"));
        out.add(format!("{rn}_{no}"));
        out.add(format!("{no}.{rn}"));
        if bases.has_year() {
            out.add(format!("{no}{rn}{y}"));
            out.add(format!("{rn}{no}{y}"));
            out.add(format!("{noc}{rnc}{y}"));
        }
    }

    let surname = &bases.surname;
    if !surname.is_empty() {
        let (ao, aoc) = (&surname.lower, &surname.cap);
        out.add(format!("{rn}{ao}"));
        out.add(format!("{rnc}{aoc}"));
        out.add(format!("{ao}{rn}"));
        if bases.has_year() {
            out.add(format!("{rn}{ao}{y}"));
            out.add(format!("{rnc}{aoc}{y}"));
        }
    }

    if !ay.is_empty() {
        for variant in rules.leet.full(rn) {
            out.add(format!("{}{ay}", capitalize(&variant)));
            out.add(format!("{variant}{ay}"));
        }
    }
}

/// Relative `r` joined with every other relative inside the pair cap.
fn relative_pairs(r: usize, bases: &Bases, pair_cap: usize, out: &mut Batch) {
    let rel = &bases.relatives[r].word;
    let y = &bases.year;
    for other in bases.relatives.iter().take(pair_cap) {
        let o = &other.word;
        if o.lower == rel.lower {
            continue;
        }
        out.add(format!("{}{}", rel.lower, o.lower));
        out.add(format!("{}{}", rel.cap, o.cap));
        out.add(format!("{}_{}", rel.lower, o.lower));
        if bases.has_year() {
            out.add(format!("{}{}{y}", rel.lower, o.lower));
            out.add(format!("{}{}{y}", rel.cap, o.cap));
        }
    }
}

fn relative_nicks(rel: &RelativeBase, bases: &Bases, tables: &Tables, out: &mut Batch) {
    let no = &bases.name.lower;
    for nick in &rel.nicks {
        let nc = capitalize(nick);
        out.add(nick.clone());
        out.add(nc.clone());
        for sfx in RELATIVE_NICK_NUMBERS.iter().chain(RELATIVE_NICK_SYMBOLS) {
            out.add(format!("{nick}{sfx}"));
            out.add(format!("{nc}{sfx}"));
        }
        if !rel.year.is_empty() {
            out.add(format!("{nick}{}", rel.year));
            out.add(format!("{nc}{}", rel.year));
        }
        if rel.sweeps_recent_years {
            for y in &tables.rules.recent_years {
                out.add(format!("{nick}{y}"));
                out.add(format!("{nc}{y}"));
            }
        }
        if !no.is_empty() {
            out.add(format!("{no}{nick}"));
            out.add(format!("{nick}{no}"));
        }
    }
}

fn doc_known(bases: &Bases, tables: &Tables, out: &mut Batch) {
    let p = &bases.profile;
    out.add_all(ident::known_variants(
        &p.document,
        &p.name,
        &p.surname,
        &bases.year,
    ));
    let doc = p.document.trim();
    for sp in &tables.rules.special_suffixes {
        out.add(format!("{doc}{sp}"));
    }
}

fn doc_cross(w: &Word, bases: &Bases, tables: &Tables, out: &mut Batch) {
    let doc = bases.profile.document.trim();
    let (lo, cap) = (&w.lower, &w.cap);
    out.add(format!("{lo}{doc}"));
    out.add(format!("{cap}{doc}"));
    out.add(format!("{doc}{lo}"));
    out.add(format!("{doc}{cap}"));
    for sp in &tables.rules.doc_suffixes {
        out.add(format!("{lo}{doc}{sp}"));
        out.add(format!("{cap}{doc}{sp}"));
    }
}

/// The bulk range sweep for an unknown document.
pub(super) fn doc_sweep(bases: &Bases, tables: &Tables, step: u64) -> Option<ident::Sweep> {
    let year = bases.year.parse().ok()?;
    let range = tables.ranges.estimate(year);
    debug!(
        "document sweep {}..={} visits {} numbers",
        range.min,
        range.max,
        range.walk_len(step)
    );
    Some(ident::sweep(range, step, &bases.name.lower))
}

fn old_password(old: &str, bases: &Bases, tables: &Tables, out: &mut Batch) {
    let rules = &tables.rules;
    let (y, yy) = (&bases.year, &bases.short);

    out.add(old);
    out.add(capitalize(old));
    out.add(upper(old));
    out.add(rules.leet.simple(old));

    for sfx in rules
        .num_suffixes
        .iter()
        .chain(&rules.special_suffixes)
        .chain(&rules.num_symbol_suffixes)
    {
        out.add(format!("{old}{sfx}"));
    }
    for pre in &rules.num_prefixes {
        out.add(format!("{pre}{old}"));
    }

    if bases.has_year() {
        out.add(format!("{old}{y}"));
        if !yy.is_empty() {
            out.add(format!("{old}{yy}"));
        }
        out.add(format!("{y}{old}"));
        for sp in &rules.special_suffixes {
            out.add(format!("{old}{y}{sp}"));
        }
    }

    if !bases.name.is_empty() {
        out.add(format!("{old}{}", bases.name.lower));
        out.add(format!("{}{old}", bases.name.lower));
    }
    for atom in bases.words.iter().map(|w| &w.lower).chain(&bases.numeric) {
        out.add(format!("{old}{atom}"));
        out.add(format!("{atom}{old}"));
    }
}

fn initial_surname(bases: &Bases, tables: &Tables, out: &mut Batch) {
    let ini = &bases.initial;
    let a = &bases.surname.lower;
    let (y, yy) = (&bases.year, &bases.short);

    out.add(format!("{ini}{a}"));
    out.add(format!("{ini}.{a}"));
    out.add(format!("{ini}_{a}"));
    out.add(format!("{}{}", ini.to_uppercase(), bases.surname.cap));

    for num in tables.rules.initial_suffixes() {
        out.add(format!("{ini}{a}{num}"));
    }
    for sp in &tables.rules.special_suffixes {
        out.add(format!("{ini}{a}{sp}"));
    }
    if bases.has_year() {
        out.add(format!("{ini}{a}{y}"));
        if !yy.is_empty() {
            out.add(format!("{ini}{a}{yy}"));
        }
    }
}

fn keywords(w: &Word, tables: &Tables, out: &mut Batch) {
    let (lo, cap) = (&w.lower, &w.cap);
    for kw in &tables.rules.keywords {
        out.add(format!("{lo}{kw}"));
        out.add(format!("{kw}{lo}"));
        out.add(format!("{cap}{kw}"));
        out.add(format!("{kw}{cap}"));
        out.add(format!("{lo}_{kw}"));
        out.add(format!("{kw}_{lo}"));
    }
}

fn keyboard(bases: &Bases, tables: &Tables, out: &mut Batch) {
    let (n, nc) = (&bases.name.lower, &bases.name.cap);
    for kp in &tables.rules.keyboard_patterns {
        out.add(kp.clone());
        if !n.is_empty() {
            out.add(format!("{n}{kp}"));
            out.add(format!("{nc}{kp}"));
            out.add(format!("{kp}{n}"));
            out.add(format!("{kp}{nc}"));
        }
    }
}

fn leet_name(bases: &Bases, tables: &Tables, out: &mut Batch) {
    let leet = &tables.rules.leet;
    let y = &bases.year;

    if bases.has_year() {
        for variant in leet.full(&bases.name.lower) {
            out.add(format!("{}{y}", capitalize(&variant)));
            out.add(format!("{variant}{y}"));
        }
    }

    if !bases.surname.is_empty() {
        let combined = format!("{}{}", bases.name.lower, bases.surname.lower);
        if combined.chars().count() <= FULL_LEET_CAP {
            for variant in leet.full(&combined) {
                out.add(capitalize(&variant));
                if bases.has_year() {
                    out.add(format!("{variant}{y}"));
                }
                out.add(variant);
            }
        }
    }
}
