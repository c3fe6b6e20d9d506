//! CLI context: settings, flags and the target being profiled.

use std::path::{Path, PathBuf};

use log::{debug, info};
use zeroize::Zeroize;

use super::{CliFlags, CommandMode, ParseError, profile_file, prompts, quiet};
use crate::engine::{Generator, Tables};
use crate::profile::{Profile, Relative};
use crate::rules::RuleTable;
use crate::settings::Settings;
use crate::sink::{Outcome, Sink, SinkError, WriteMode, with_progress};
use crate::tui::print_help;
use crate::wordlist::{self, WordForms};

const DEFAULT_OUTPUT: &str = "persona.txt";

/// Early exit. `Failed` has already been reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Done {
    Early,
    Failed,
}

pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub flags: CliFlags,
    args: Vec<String>,
    profile: Profile,
    relatives: Vec<Relative>,
}

impl Context {
    pub fn new(args: Vec<String>) -> Result<Self, ParseError> {
        let flags = super::parse(&args)?;

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        });

        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings {
                cli_command: saved_settings.cli_command.clone(),
                ..Default::default()
            }
        };

        Ok(Self {
            settings,
            saved_settings,
            flags,
            args,
            profile: Profile::default(),
            relatives: Vec::new(),
        })
    }

    /// Run the CLI. `Err(Done)` for early exits.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.handle_command_mode()?;
        self.apply_saved_command();
        quiet::set(self.flags.quiet);
        self.apply_flags()?;
        self.load_profile()?;
        self.save_if_asked();

        if self.flags.word_mode() {
            return self.expand_words();
        }
        if self.profile.is_empty() && self.relatives.is_empty() {
            prompts::nothing_to_generate();
            return Ok(());
        }
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done::Early);
        }
        if self.flags.version {
            println!("persona {}", env!("CARGO_PKG_VERSION"));
            return Err(Done::Early);
        }
        Ok(())
    }

    fn handle_command_mode(&mut self) -> Result<(), Done> {
        match self.flags.command {
            CommandMode::Get => {
                if self.settings.cli_command.is_empty() {
                    println!("(no saved command)");
                } else {
                    println!("{}", self.settings.cli_command);
                }
                Err(Done::Early)
            }
            CommandMode::Unset => {
                self.saved_settings.cli_command.clear();
                if let Err(e) = self.saved_settings.save_to_file() {
                    prompts::error(&format!("Failed to clear command: {e}"));
                    return Err(Done::Failed);
                }
                Err(Done::Early)
            }
            CommandMode::Set => {
                let command = self.args[1..]
                    .iter()
                    .filter(|a| *a != "-c" && *a != "--command")
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" ");
                self.saved_settings.cli_command = command.clone();
                if let Err(e) = self.saved_settings.save_to_file() {
                    prompts::warn(&format!("Failed to save command: {e}"));
                }
                self.settings.cli_command = command;
                Ok(())
            }
            CommandMode::None => Ok(()),
        }
    }

    /// With no explicit arguments, run the saved command's flags instead.
    fn apply_saved_command(&mut self) {
        if self.settings.cli_command.is_empty()
            || self.flags.command != CommandMode::None
            || self.flags.has_explicit_args()
        {
            return;
        }

        let mut combined = vec![self.args[0].clone()];
        combined.extend(
            self.settings
                .cli_command
                .split_whitespace()
                .map(String::from),
        );
        match super::parse(&combined) {
            Ok(saved) => {
                debug!("running saved command: {}", self.settings.cli_command);
                let verbose = self.flags.verbose;
                let quiet = self.flags.quiet;
                self.flags = saved;
                self.flags.verbose = self.flags.verbose.or(verbose);
                self.flags.quiet |= quiet;
            }
            Err(e) => prompts::warn(&format!("Ignoring saved command: {e}")),
        }
    }

    fn apply_flags(&mut self) -> Result<(), Done> {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if flags.default {
            *settings = Settings {
                cli_command: settings.cli_command.clone(),
                ..Default::default()
            };
        }
        if let Some(n) = flags.min_len {
            settings.min_len = n;
        }
        if let Some(n) = flags.max_len {
            settings.max_len = n;
        }
        if let Some(n) = flags.max_candidates {
            settings.max_candidates = n;
        }
        if let Some(n) = flags.pair_cap {
            settings.pair_cap = n;
        }
        if let Some(step) = flags.doc_sweep {
            settings.doc_sweep_step = step;
        }
        if flags.no_locale {
            settings.locale = false;
        }
        if flags.full_nicks {
            settings.full_nicknames = true;
        }
        if settings.min_len > settings.max_len {
            prompts::error(&format!(
                "Minimum length {} exceeds maximum length {}",
                settings.min_len, settings.max_len
            ));
            return Err(Done::Failed);
        }

        if let Some(path) = &flags.output {
            settings.output_file_path = output_path(path);
            settings.output_to_terminal = false;
        }
        if flags.clipboard {
            settings.to_clipboard = true;
        }
        Ok(())
    }

    fn load_profile(&mut self) -> Result<(), Done> {
        if let Some(path) = &self.flags.profile.file {
            match profile_file::load(Path::new(path)) {
                Ok((profile, relatives)) => {
                    self.profile = profile;
                    self.relatives = relatives;
                }
                Err(e) => {
                    prompts::error(&e.to_string());
                    return Err(Done::Failed);
                }
            }
        }

        let rejected = self
            .flags
            .profile
            .apply(&mut self.profile, &mut self.relatives);
        if !rejected.is_empty() {
            prompts::warn(&format!(
                "Only three former passwords are kept; ignoring {}",
                rejected.len()
            ));
        }
        info!(
            "{} relative(s), {} former password(s)",
            self.relatives.len(),
            self.profile
                .old_passwords
                .iter()
                .filter(|p| !p.is_empty())
                .count()
        );
        Ok(())
    }

    fn save_if_asked(&self) {
        if !self.flags.save {
            return;
        }
        let to_save = Settings {
            cli_command: self.saved_settings.cli_command.clone(),
            to_clipboard: false,
            ..self.settings.clone()
        };
        match to_save.save_to_file() {
            Ok(()) => info!("settings saved to {}", Settings::path().display()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn open_sink(&self) -> Result<Sink, Done> {
        if self.settings.to_clipboard {
            match Sink::clipboard() {
                Ok(sink) => return Ok(sink),
                Err(e) => {
                    debug!("{e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Done::Early);
                    }
                    return Ok(Sink::terminal());
                }
            }
        }

        if self.settings.output_to_terminal || self.settings.output_file_path.is_empty() {
            return Ok(Sink::terminal());
        }

        let path = PathBuf::from(&self.settings.output_file_path);
        let sink = match Sink::file(&path, WriteMode::Create) {
            Err(SinkError::Exists { .. }) => {
                let Some(mode) = prompts::file_exists_prompt(&self.settings.output_file_path)
                else {
                    prompts::error(&format!(
                        "{} already exists; not written",
                        self.settings.output_file_path
                    ));
                    return Err(Done::Failed);
                };
                Sink::file(&path, mode)
            }
            other => other,
        };
        sink.map_err(|e| {
            prompts::error(&e.to_string());
            Done::Failed
        })
    }

    fn generate_output(&mut self) -> Result<(), Done> {
        let generator = Generator::new(Tables::default(), &self.settings);
        let candidates = generator.candidates(&self.profile, &self.relatives);
        self.stream(candidates)
    }

    /// `--from-wordlist` lines first, then `--words`.
    fn expand_words(&self) -> Result<(), Done> {
        let lines = match &self.flags.wordlist {
            Some(path) => wordlist::read_wordlist(Path::new(path)).map_err(|e| {
                prompts::error(&e.to_string());
                Done::Failed
            })?,
            None => Vec::new(),
        };
        let words = self
            .flags
            .words
            .as_deref()
            .map(wordlist::split_words)
            .unwrap_or_default();
        let forms = WordForms {
            suffix: self.flags.suffix.clone().unwrap_or_default(),
            ..self.flags.word_forms.clone().unwrap_or_default()
        };
        info!(
            "{} wordlist line(s), {} base word(s), forms {}",
            lines.len(),
            words.len(),
            forms.letters()
        );

        let expanded = wordlist::combined(&lines, &words, &forms, &RuleTable::default());
        if expanded.is_empty() {
            prompts::warn("No words to expand.");
            return Ok(());
        }
        self.stream(wordlist::admitted(expanded, &self.settings))
    }

    fn stream<I>(&self, candidates: I) -> Result<(), Done>
    where
        I: Iterator<Item = String>,
    {
        let mut sink = self.open_sink()?;

        let show_progress =
            sink.path().is_some() && !quiet::enabled() && quiet::stdout_is_terminal();

        let written = if show_progress {
            with_progress(candidates, &mut sink, self.settings.ceiling()).map(Outcome::written)
        } else {
            sink.drain(candidates)
        };

        let path = sink.path().map(|p| {
            std::fs::canonicalize(p)
                .unwrap_or_else(|_| p.to_path_buf())
                .display()
                .to_string()
        });
        let clipboard = self.settings.to_clipboard && !sink.is_terminal() && path.is_none();
        let result = written.and_then(|_| sink.finish());

        match result {
            Ok(count) => {
                if clipboard {
                    prompts::clipboard_copied(count);
                } else if let Some(path) = path
                    && !show_progress
                {
                    prompts::candidates_written(count, &path);
                }
                Ok(())
            }
            Err(e) => {
                prompts::error(&e.to_string());
                Err(Done::Failed)
            }
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.profile.zeroize();
        for rel in &mut self.relatives {
            rel.name.zeroize();
        }
    }
}

/// `.` and trailing `/` name a directory: write `persona.txt` inside it.
/// A path without an extension gets `.txt`.
fn output_path(raw: &str) -> String {
    if raw == "." {
        DEFAULT_OUTPUT.to_string()
    } else if raw.ends_with('/') {
        format!("{raw}{DEFAULT_OUTPUT}")
    } else if Path::new(raw).extension().is_none() {
        format!("{raw}.txt")
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(".", "persona.txt")]
    #[case("out/", "out/persona.txt")]
    #[case("carlos", "carlos.txt")]
    #[case("lists/carlos.lst", "lists/carlos.lst")]
    fn output_paths(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(output_path(raw), expected);
    }
}
