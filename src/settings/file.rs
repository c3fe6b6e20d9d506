//! Settings file persistence.
//!
//! One line of comma-separated fields. Free-text fields escape `,` and `|`
//! with a leading `|`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::warn;

use super::Settings;

const FIELDS: usize = 10;

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{}\n",
        settings.min_len,
        settings.max_len,
        settings.max_candidates,
        settings.doc_sweep_step,
        settings.pair_cap,
        settings.locale,
        settings.full_nicknames,
        escape(&settings.output_file_path),
        settings.output_to_terminal,
        escape(&settings.cli_command),
    );

    file.write_all(data.as_bytes())
}

pub fn load(settings: &mut Settings, path: &Path) -> io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return save(settings, path);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        warn!(
            "settings file {} has {} fields, expected {FIELDS}; rewriting defaults",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    settings.min_len = parts[0].parse().unwrap_or(settings.min_len);
    settings.max_len = parts[1].parse().unwrap_or(settings.max_len);
    settings.max_candidates = parts[2].parse().unwrap_or(settings.max_candidates);
    settings.doc_sweep_step = parts[3].parse().unwrap_or(settings.doc_sweep_step);
    settings.pair_cap = parts[4].parse().unwrap_or(settings.pair_cap);
    settings.locale = parts[5].parse().unwrap_or(settings.locale);
    settings.full_nicknames = parts[6].parse().unwrap_or(settings.full_nicknames);
    settings.output_file_path = parts[7].clone();
    settings.output_to_terminal = parts[8].parse().unwrap_or(settings.output_to_terminal);
    settings.cli_command = parts[9].clone();

    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/persona/settings")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, ',' | '|') {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn split_respects_escapes() {
        assert_eq!(split_escaped("a,b|,c,,d", ','), vec!["a", "b,c", "", "d"]);
        assert_eq!(split_escaped("a,", ','), vec!["a", ""]);
        assert_eq!(split_escaped("x||y", ','), vec!["x|y"]);
    }

    #[test]
    fn escape_round_trips_through_split() {
        let raw = "--name a,b --relative x|y";
        assert_eq!(split_escaped(&escape(raw), ','), vec![raw]);
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let saved = Settings {
            min_len: 6,
            max_candidates: 5_000,
            doc_sweep_step: 1_000,
            locale: false,
            output_file_path: "/tmp/out,1.txt".into(),
            cli_command: "--name carlos --year 1990".into(),
            ..Settings::default()
        };
        save(&saved, &path).unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings");
        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert!(path.exists());
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn malformed_line_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "74,19,false\n").unwrap();
        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, Settings::default());
        let rewritten = fs::read_to_string(&path).unwrap();
        assert_eq!(split_escaped(rewritten.trim_end(), ',').len(), FIELDS);
    }
}
