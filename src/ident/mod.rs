//! Identity-document range estimator and variant builders.

mod format;
mod range;

pub use format::{clean, format_with_dashes, format_with_dots, formats, parse_digits};
pub use range::{IdRange, RangeTable};

use std::collections::VecDeque;

use crate::rules::short_year;
use crate::transform::capitalize;
use crate::unique::UniqueList;

/// Sweep step used when `--doc-sweep` is given without a value.
pub const DEFAULT_SWEEP_STEP: u64 = 1_000;

const KNOWN_SUFFIXES: &[&str] = &["!", "@", "#", ".", "1", "12", "123"];
const NAME_DOC_SUFFIXES: &[&str] = &["!", "@", "1", "123"];

/// Lazy walk over a document range. Each visited number expands into its
/// formats, `!`/`.` endings and combinations with the name.
#[derive(Debug, Clone)]
pub struct Sweep {
    next: Option<u64>,
    max: u64,
    step: u64,
    name: String,
    cap: String,
    buf: VecDeque<String>,
}

pub fn sweep(range: IdRange, step: u64, name: &str) -> Sweep {
    let name = name.trim().to_lowercase();
    Sweep {
        next: (range.min <= range.max).then_some(range.min),
        max: range.max,
        step: step.max(1),
        cap: capitalize(&name),
        name,
        buf: VecDeque::new(),
    }
}

impl Sweep {
    fn fill(&mut self, n: u64) {
        for f in formats(n) {
            self.buf.push_back(f.clone());
            self.buf.push_back(format!("{f}!"));
            self.buf.push_back(format!("{f}."));
            if !self.name.is_empty() {
                let (name, cap) = (&self.name, &self.cap);
                self.buf.push_back(format!("{name}{f}"));
                self.buf.push_back(format!("{cap}{f}"));
                self.buf.push_back(format!("{f}{name}"));
                self.buf.push_back(format!("{f}{cap}"));
                self.buf.push_back(format!("{name}.{f}"));
                self.buf.push_back(format!("{name}_{f}"));
            }
        }
    }
}

impl Iterator for Sweep {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(s) = self.buf.pop_front() {
                return Some(s);
            }
            let n = self.next?;
            self.next = n.checked_add(self.step).filter(|next| *next <= self.max);
            self.fill(n);
        }
    }
}

/// Everything derivable from an exactly known document number.
pub fn known_variants(doc: &str, name: &str, surname: &str, year: &str) -> Vec<String> {
    let cleaned = clean(doc.trim());
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut doc_forms = UniqueList::new();
    doc_forms.push(cleaned.clone());
    if let Some(n) = parse_digits(&cleaned).filter(|n| *n > 0) {
        doc_forms.extend(formats(n));
    }

    let n = name.trim().to_lowercase();
    let nc = capitalize(&n);
    let a = surname.trim().to_lowercase();
    let ac = capitalize(&a);
    let year = year.trim();
    let short = short_year(year);

    let mut out = UniqueList::new();
    for f in doc_forms.into_vec() {
        out.push(f.clone());
        for suffix in KNOWN_SUFFIXES {
            out.push(format!("{f}{suffix}"));
        }

        if !n.is_empty() {
            out.extend([
                format!("{n}{f}"),
                format!("{nc}{f}"),
                format!("{f}{n}"),
                format!("{f}{nc}"),
                format!("{n}.{f}"),
                format!("{n}_{f}"),
                format!("{nc}.{f}"),
            ]);
        }
        if !a.is_empty() {
            out.extend([format!("{a}{f}"), format!("{ac}{f}"), format!("{f}{a}")]);
        }
        if !year.is_empty() {
            out.push(format!("{f}{year}"));
            out.push(format!("{year}{f}"));
            if let Some(short) = short {
                out.push(format!("{f}{short}"));
            }
        }
        if !n.is_empty() {
            for suffix in NAME_DOC_SUFFIXES {
                out.push(format!("{n}{f}{suffix}"));
                out.push(format!("{nc}{f}{suffix}"));
            }
        }
    }
    out.into_vec()
}

/// Prefix + number + check digit, for every prefix and every possible check
/// digit, compact and `PP-NNNNNNNN-D`.
pub fn composite_ids(doc: &str, prefixes: &[String]) -> Vec<String> {
    let digits = clean(doc.trim());
    if digits.is_empty() {
        return Vec::new();
    }

    let mut out = UniqueList::new();
    for prefix in prefixes {
        for d in 0..=9 {
            out.push(format!("{prefix}{digits}{d}"));
            out.push(format!("{prefix}-{digits}-{d}"));
        }
    }
    out.into_vec()
}
