//! Run settings.

mod file;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Shortest admitted candidate, in characters.
    pub min_len: usize,
    /// Longest admitted candidate, in characters.
    pub max_len: usize,
    /// Stop after this many candidates. 0 means no ceiling.
    pub max_candidates: usize,
    /// Document range sweep step. 0 disables the sweep.
    pub doc_sweep_step: u64,
    /// Relatives taking part in pairwise combination.
    pub pair_cap: usize,
    pub locale: bool,
    /// Run every nickname through the full transform and affix set.
    pub full_nicknames: bool,
    pub output_file_path: String,
    pub output_to_terminal: bool,
    pub cli_command: String,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&file::default_path())
    }

    /// Load from `path`, writing the defaults there first when the file is
    /// missing, empty or unreadable as a settings line.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(&mut settings, path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn has_saved_command() -> bool {
        Self::load_from_file()
            .map(|s| !s.cli_command.is_empty())
            .unwrap_or(false)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }

    /// Whether `candidate` fits the length window, counted in characters.
    pub fn admits(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        len >= self.min_len && len <= self.max_len
    }

    pub fn ceiling(&self) -> Option<usize> {
        (self.max_candidates > 0).then_some(self.max_candidates)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_len: 4,
            max_len: 28,
            max_candidates: 0,
            doc_sweep_step: 0,
            pair_cap: 10,
            locale: true,
            full_nicknames: false,
            output_file_path: String::new(),
            output_to_terminal: true,
            cli_command: String::new(),
            to_clipboard: false,
        }
    }
}
