//! Messages and yes/no prompts. Everything goes to stderr so stdout carries
//! only candidates.

use std::io::{self, Write};

use super::quiet;
use crate::sink::WriteMode;
use crate::terminal::{RED, RESET, YELLOW};

/// Yellow, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

fn ask(question: &str) -> Option<String> {
    eprint!("{question}");
    let _ = io::stderr().flush();
    let mut input = String::new();
    io::stdin().read_line(&mut input).ok()?;
    Some(input.trim().to_lowercase())
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        eprintln!("*** {count} CANDIDATE(S) COPIED TO CLIPBOARD ***");
    }
}

/// Clipboard could not be opened. True means print to the terminal instead.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }
    match ask("Clipboard unavailable. Print to terminal instead? [Y/n]: ") {
        Some(answer) if answer.is_empty() || answer == "y" || answer == "yes" => true,
        None => true,
        Some(_) => {
            eprintln!("Aborted.");
            false
        }
    }
}

/// The output file exists. `None` cancels; without a terminal to ask on,
/// the run is cancelled rather than touching the file.
pub fn file_exists_prompt(path: &str) -> Option<WriteMode> {
    if quiet::skip_prompt() {
        return None;
    }
    loop {
        match ask(&format!("{path} exists. [a]ppend, [o]verwrite or [c]ancel: "))?.as_str() {
            "a" | "append" => return Some(WriteMode::Append),
            "o" | "overwrite" => return Some(WriteMode::Overwrite),
            "c" | "cancel" | "" => return None,
            _ => error("Please enter 'a', 'o' or 'c'."),
        }
    }
}

pub fn candidates_written(count: usize, path: &str) {
    if !quiet::enabled() {
        eprintln!("{count} candidate(s) \u{2192} {path}");
    }
}

pub fn nothing_to_generate() {
    warn("Profile is empty: give at least one field or relative (see --help).");
}
