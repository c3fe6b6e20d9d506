//! `key = value` profile files.
//!
//! ```text
//! # target
//! name = Carlos
//! birth = 15031990
//! relative = Ana:hija:2015
//! old = river1990
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zeroize::Zeroize;

use crate::profile::{Profile, Relative};

#[derive(Debug, Error)]
pub enum ProfileFileError {
    #[error("failed to read profile file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected `key = value`")]
    Syntax { line: usize },
    #[error("line {line}: unknown key `{key}`")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: at most three `old` passwords")]
    TooManyOld { line: usize },
}

pub fn load(path: &Path) -> Result<(Profile, Vec<Relative>), ProfileFileError> {
    let mut text = fs::read_to_string(path).map_err(|source| ProfileFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse_str(&text);
    text.zeroize();
    parsed
}

pub fn parse_str(text: &str) -> Result<(Profile, Vec<Relative>), ProfileFileError> {
    let mut profile = Profile::default();
    let mut relatives = Vec::new();

    for (n, raw) in text.lines().enumerate() {
        let line = n + 1;
        let raw = raw.trim();
        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }
        let (key, value) = raw
            .split_once('=')
            .ok_or(ProfileFileError::Syntax { line })?;
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "name" => profile.name = value.to_string(),
            "surname" => profile.surname = value.to_string(),
            "doc" | "document" => profile.document = value.to_string(),
            "birth" => profile.set_birth_date(value),
            "year" => profile.set_year(value),
            "team" => profile.affiliation = value.to_string(),
            "city" => profile.city = value.to_string(),
            "age" => profile.age = value.to_string(),
            "pet" => profile.pet = value.to_string(),
            "partner" => profile.partner = value.to_string(),
            "old" => {
                if !profile.push_old_password(value) {
                    return Err(ProfileFileError::TooManyOld { line });
                }
            }
            "relative" => {
                if let Ok(rel) = value.parse::<Relative>()
                    && !rel.name.is_empty()
                {
                    relatives.push(rel);
                }
            }
            other => {
                return Err(ProfileFileError::UnknownKey {
                    line,
                    key: other.to_string(),
                });
            }
        }
    }

    profile.normalize();
    Ok((profile, relatives))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::RelationKind;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_fields_relatives_and_comments() {
        let text = "\
# target
name = Carlos
birth = 15031990
team=River
old = river1990

relative = Ana:hija:2015
relative = Boby:perro
";
        let (p, rels) = parse_str(text).unwrap();
        assert_eq!(p.name, "Carlos");
        assert_eq!(p.year, "1990");
        assert_eq!(p.short_year, "90");
        assert_eq!(p.affiliation, "River");
        assert_eq!(p.old_passwords[0], "river1990");
        assert_eq!(rels.len(), 2);
        assert_eq!(rels[0].kind, RelationKind::Child);
        assert_eq!(rels[0].year, "2015");
        assert_eq!(rels[1].kind, RelationKind::Pet);
    }

    #[test]
    fn values_may_contain_equals() {
        let (p, _) = parse_str("old = a=b").unwrap();
        assert_eq!(p.old_passwords[0], "a=b");
    }

    #[test]
    fn reports_line_numbers() {
        assert!(matches!(
            parse_str("name = x\nnickname\n"),
            Err(ProfileFileError::Syntax { line: 2 })
        ));
        assert!(matches!(
            parse_str("\nshoe = 42\n"),
            Err(ProfileFileError::UnknownKey { line: 2, .. })
        ));
        assert!(matches!(
            parse_str("old=a\nold=b\nold=c\nold=d\n"),
            Err(ProfileFileError::TooManyOld { line: 4 })
        ));
    }

    #[test]
    fn loads_from_disk() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "name = Juan\nyear = 1985\n").unwrap();
        let (p, rels) = load(file.path()).unwrap();
        assert_eq!(p.name, "Juan");
        assert_eq!(p.short_year, "85");
        assert!(rels.is_empty());

        let missing = file.path().with_extension("missing");
        assert!(matches!(load(&missing), Err(ProfileFileError::Io { .. })));
    }
}
