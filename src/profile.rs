//! Target profile, relatives and atom extraction.

use std::str::FromStr;

use zeroize::Zeroize;

use crate::rules::short_year;

/// Biographical fields about the target. Every field is optional; an empty
/// string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub surname: String,
    pub document: String,
    /// Raw `DDMMYYYY` birth date.
    pub birth_date: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub short_year: String,
    pub affiliation: String,
    pub city: String,
    pub age: String,
    pub pet: String,
    pub partner: String,
    pub old_passwords: [String; 3],
}

impl Profile {
    /// Store `raw` as the birth date and decompose it. Anything other than
    /// exactly eight digits leaves day/month/year untouched.
    pub fn with_birth_date(mut self, raw: &str) -> Self {
        self.set_birth_date(raw);
        self
    }

    pub fn set_birth_date(&mut self, raw: &str) {
        let raw = raw.trim();
        self.birth_date = raw.to_string();
        if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
            self.day = raw[0..2].to_string();
            self.month = raw[2..4].to_string();
            self.year = raw[4..8].to_string();
            self.short_year = raw[6..8].to_string();
        }
    }

    /// Store a four-digit year and derive the short year from it.
    pub fn set_year(&mut self, raw: &str) {
        self.year = raw.trim().to_string();
        if let Some(short) = short_year(&self.year) {
            self.short_year = short.to_string();
        }
    }

    /// Fill the next free former-password slot. Returns false when all three
    /// are taken.
    pub fn push_old_password(&mut self, pass: &str) -> bool {
        match self.old_passwords.iter_mut().find(|p| p.is_empty()) {
            Some(slot) => {
                *slot = pass.trim().to_string();
                true
            }
            None => false,
        }
    }

    /// Fill derived fields after the raw ones were set individually.
    pub fn normalize(&mut self) {
        if self.day.is_empty() && !self.birth_date.is_empty() {
            let raw = self.birth_date.clone();
            self.set_birth_date(&raw);
        }
        if self.short_year.is_empty()
            && let Some(short) = short_year(self.year.trim())
        {
            self.short_year = short.to_string();
        }
    }

    pub fn has_date(&self) -> bool {
        !self.day.is_empty() && !self.month.is_empty() && !self.year.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.trim().is_empty())
    }

    fn fields(&self) -> [&String; 16] {
        [
            &self.name,
            &self.surname,
            &self.document,
            &self.birth_date,
            &self.day,
            &self.month,
            &self.year,
            &self.short_year,
            &self.affiliation,
            &self.city,
            &self.age,
            &self.pet,
            &self.partner,
            &self.old_passwords[0],
            &self.old_passwords[1],
            &self.old_passwords[2],
        ]
    }

    /// Extract normalized atoms: textual fields first, then numeric ones.
    pub fn atoms(&self) -> Vec<Atom> {
        let mut atoms: Vec<Atom> = Vec::new();

        let textual = [
            &self.name,
            &self.surname,
            &self.affiliation,
            &self.city,
            &self.pet,
            &self.partner,
        ];
        let numeric = [
            &self.document,
            &self.year,
            &self.short_year,
            &self.day,
            &self.month,
            &self.birth_date,
            &self.age,
        ];

        let kinds = textual
            .into_iter()
            .map(|v| (v, AtomKind::Textual))
            .chain(numeric.into_iter().map(|v| (v, AtomKind::Numeric)));

        for (raw, kind) in kinds {
            let value = raw.trim().to_lowercase();
            if value.chars().count() < 2 || atoms.iter().any(|a| a.value == value) {
                continue;
            }
            atoms.push(Atom { value, kind });
        }
        atoms
    }
}

impl Zeroize for Profile {
    fn zeroize(&mut self) {
        self.name.zeroize();
        self.surname.zeroize();
        self.document.zeroize();
        self.birth_date.zeroize();
        self.day.zeroize();
        self.month.zeroize();
        self.year.zeroize();
        self.short_year.zeroize();
        self.affiliation.zeroize();
        self.city.zeroize();
        self.age.zeroize();
        self.partner.zeroize();
        self.pet.zeroize();
        for pass in self.old_passwords.iter_mut() {
            pass.zeroize();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomKind {
    Textual,
    Numeric,
}

/// A normalized token derived from one profile field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub value: String,
    pub kind: AtomKind,
}

impl Atom {
    pub fn is_textual(&self) -> bool {
        self.kind == AtomKind::Textual
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RelationKind {
    Child,
    Partner,
    Pet,
    Parent,
    Sibling,
    Friend,
    Other(String),
    #[default]
    Unspecified,
}

impl RelationKind {
    /// Children, pets and unknown relations get the recent-year sweep: their
    /// year is the one most often guessed wrong or left out.
    pub fn sweeps_recent_years(&self) -> bool {
        matches!(self, Self::Child | Self::Pet | Self::Unspecified)
    }
}

impl FromStr for RelationKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let kind = match s.as_str() {
            "" => Self::Unspecified,
            k if k.contains("hij") || ["child", "son", "daughter", "kid"].contains(&k) => {
                Self::Child
            }
            k if k.contains("mascota") || ["pet", "dog", "cat", "perro", "gato"].contains(&k) => {
                Self::Pet
            }
            "pareja" | "novio" | "novia" | "esposo" | "esposa" | "partner" | "wife" | "husband" => {
                Self::Partner
            }
            "padre" | "madre" | "papa" | "mama" | "parent" | "father" | "mother" => Self::Parent,
            k if k.starts_with("herman") || ["sibling", "brother", "sister"].contains(&k) => {
                Self::Sibling
            }
            k if k.starts_with("amig") || k == "friend" => Self::Friend,
            other => Self::Other(other.to_string()),
        };
        Ok(kind)
    }
}

/// A person or pet in the target's life.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Relative {
    pub name: String,
    pub kind: RelationKind,
    /// Birth or adoption year, when known.
    pub year: String,
}

impl Relative {
    pub fn new(name: &str, kind: RelationKind, year: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            kind,
            year: year.trim().to_string(),
        }
    }
}

/// `NAME[:KIND[:YEAR]]`, as accepted on the command line and in profile files.
impl FromStr for Relative {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let name = parts.next().unwrap_or_default();
        let kind = parts.next().unwrap_or_default().parse()?;
        let year = parts.next().unwrap_or_default();
        Ok(Self::new(name, kind, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn birth_date_decomposes() {
        let p = Profile::default().with_birth_date("15031990");
        assert_eq!(p.day, "15");
        assert_eq!(p.month, "03");
        assert_eq!(p.year, "1990");
        assert_eq!(p.short_year, "90");
        assert!(p.has_date());
    }

    #[rstest]
    #[case("1503199")]
    #[case("15-03-1990")]
    #[case("abcdefgh")]
    fn malformed_birth_date_leaves_fields_empty(#[case] raw: &str) {
        let p = Profile::default().with_birth_date(raw);
        assert!(p.day.is_empty());
        assert!(p.year.is_empty());
        assert!(!p.has_date());
    }

    #[test]
    fn atoms_are_normalized_and_deduplicated() {
        let p = Profile {
            name: "  Carlos ".into(),
            surname: "CARLOS".into(),
            city: "x".into(),
            pet: "Boby".into(),
            age: "34".into(),
            ..Default::default()
        };
        let atoms = p.atoms();
        let values: Vec<&str> = atoms.iter().map(|a| a.value.as_str()).collect();
        assert_eq!(values, vec!["carlos", "boby", "34"]);
        assert!(atoms[0].is_textual());
        assert!(!atoms[2].is_textual());
    }

    #[test]
    fn year_derives_short_year() {
        let mut p = Profile::default();
        p.set_year("1990");
        assert_eq!(p.short_year, "90");
    }

    #[test]
    fn old_password_slots() {
        let mut p = Profile::default();
        assert!(p.push_old_password("a"));
        assert!(p.push_old_password("b"));
        assert!(p.push_old_password("c"));
        assert!(!p.push_old_password("d"));
    }

    #[test]
    fn empty_profile() {
        assert!(Profile::default().is_empty());
        assert!(!Profile { pet: "boby".into(), ..Default::default() }.is_empty());
    }

    #[rstest]
    #[case("hijo", RelationKind::Child)]
    #[case("Hija", RelationKind::Child)]
    #[case("mascota", RelationKind::Pet)]
    #[case("madre", RelationKind::Parent)]
    #[case("hermana", RelationKind::Sibling)]
    #[case("", RelationKind::Unspecified)]
    #[case("jefe", RelationKind::Other("jefe".into()))]
    fn relation_kind_parsing(#[case] raw: &str, #[case] expected: RelationKind) {
        assert_eq!(raw.parse::<RelationKind>().unwrap(), expected);
    }

    #[test]
    fn zeroize_clears_every_field() {
        let mut p = Profile::default().with_birth_date("15031990");
        p.name = "carlos".into();
        p.push_old_password("secreto");
        p.zeroize();
        assert!(p.is_empty());
    }

    #[test]
    fn relative_from_cli_string() {
        let r: Relative = "Valentina:hija:2015".parse().unwrap();
        assert_eq!(r.name, "Valentina");
        assert_eq!(r.kind, RelationKind::Child);
        assert_eq!(r.year, "2015");

        let bare: Relative = "Firulais".parse().unwrap();
        assert_eq!(bare.kind, RelationKind::Unspecified);
        assert!(bare.year.is_empty());
    }
}
