use std::path::{Path, PathBuf};
use std::process::exit;

use log::warn;
use zeroize::Zeroize;

use crate::cli::profile_file;
use crate::engine::{Generator, Tables};
use crate::profile::{Profile, Relative};
use crate::rules::RuleTable;
use crate::settings::Settings;
use crate::sink::{Sink, SinkError, WriteMode, with_progress};
use crate::terminal::{box_bottom, box_line, box_top, clear, print_error, reset_terminal};
use crate::wordlist::{self, WordForms};

use super::{
    enter_prompt, get_editable_input, get_numeric_input, print_file_exists, print_help,
    print_main_menu, print_profile_menu, print_relatives_menu, print_settings_menu,
    print_words_menu,
};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Ask whether to append to or overwrite an existing output file.
pub fn gen_file_exists_menu(path: &str) -> Option<WriteMode> {
    use std::io::Write;

    print_file_exists(path);
    loop {
        let answer = get_editable_input("Enter your choice", "")?;
        match answer.trim().to_lowercase().as_str() {
            "a" => return Some(WriteMode::Append),
            "o" => return Some(WriteMode::Overwrite),
            _ => {
                print!(
                    "\x1b[2A\x1b[2K\x1b[31mInvalid choice. Please enter 'a' or 'o'.\x1b[0m\n\x1b[2K"
                );
                let _ = std::io::stdout().flush();
            }
        }
    }
}

fn open_sink(settings: &Settings) -> Option<Sink> {
    if settings.output_to_terminal || settings.output_file_path.is_empty() {
        return Some(Sink::terminal());
    }
    let path = PathBuf::from(&settings.output_file_path);
    let opened = match Sink::file(&path, WriteMode::Create) {
        Err(SinkError::Exists { .. }) => {
            Sink::file(&path, gen_file_exists_menu(&settings.output_file_path)?)
        }
        other => other,
    };
    match opened {
        Ok(sink) => Some(sink),
        Err(e) => {
            print_error(&e.to_string());
            None
        }
    }
}

/// Generate for the collected profile into the configured output.
pub fn output_candidates(settings: &Settings, profile: &Profile, relatives: &[Relative]) {
    if profile.is_empty() && relatives.is_empty() {
        print_error("Profile is empty: fill in at least one field or relative.");
        return;
    }
    let generator = Generator::new(Tables::default(), settings);
    write_out(settings, generator.candidates(profile, relatives));
}

/// Base words and wordlist file collected by the words menu.
#[derive(Debug, Clone, Default)]
pub struct WordsInput {
    pub words: String,
    pub forms: WordForms,
    pub wordlist: String,
}

/// Expand the words menu input into the configured output.
pub fn output_words(settings: &Settings, input: &WordsInput) -> Result<(), String> {
    let lines = match input.wordlist.trim() {
        "" => Vec::new(),
        path => wordlist::read_wordlist(Path::new(path)).map_err(|e| e.to_string())?,
    };
    let words = wordlist::split_words(&input.words);
    let expanded = wordlist::combined(&lines, &words, &input.forms, &RuleTable::default());
    if expanded.is_empty() {
        return Err("Nothing to expand: give base words or a wordlist file.".into());
    }
    clear();
    write_out(settings, wordlist::admitted(expanded, settings));
    Ok(())
}

fn write_out<I>(settings: &Settings, candidates: I)
where
    I: Iterator<Item = String>,
{
    let Some(mut sink) = open_sink(settings) else {
        return;
    };

    let result = if sink.is_terminal() {
        clear();
        sink.drain(candidates).and_then(|_| sink.finish())
    } else {
        with_progress(candidates, &mut sink, settings.ceiling()).and_then(|_| sink.finish())
    };

    reset_terminal();
    if let Err(e) = result {
        print_error(&e.to_string());
    }
}

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("{e}");
        println!("Error loading settings: {e}");
        Settings::default()
    });
    let mut profile = Profile::default();
    let mut relatives: Vec<Relative> = Vec::new();
    let mut print_invalid = false;

    loop {
        print_main_menu(&profile, &relatives, &mut print_invalid);

        let Some(input) = get_editable_input(enter_prompt(), "") else {
            clear();
            continue;
        };

        match input.trim() {
            "" => {
                clear();
                output_candidates(&settings, &profile, &relatives);
            }
            "1" => update_profile(&mut profile, &mut relatives),
            "2" => update_relatives(&mut relatives),
            "3" => update_settings(&mut settings, &profile, &relatives),
            "4" => clear(),
            "5" => update_words(&settings),
            "6" => {
                clear();
                print_help();
            }
            "7" => {
                clear();
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }

    profile.zeroize();
    for rel in &mut relatives {
        rel.name.zeroize();
    }
}

fn update_profile(profile: &mut Profile, relatives: &mut Vec<Relative>) {
    let mut error: Option<String> = None;

    loop {
        print_profile_menu(profile, error.as_deref());
        error = None;

        let Some(choice) = get_editable_input(enter_prompt(), "") else {
            break;
        };
        match choice.trim() {
            "" => break,
            "c" => profile.zeroize(),
            choice => match choice.parse::<usize>() {
                Ok(n @ 1..=13) => edit_profile_field(profile, n),
                Ok(14) => {
                    let Some(path) = get_editable_input("Profile file path", "") else {
                        continue;
                    };
                    match profile_file::load(Path::new(path.trim())) {
                        Ok((loaded, rels)) => {
                            *profile = loaded;
                            relatives.extend(rels);
                        }
                        Err(e) => error = Some(e.to_string()),
                    }
                }
                _ => error = Some("Invalid input, please enter a valid menu option...".into()),
            },
        }
    }
    clear();
}

fn edit_profile_field(profile: &mut Profile, field: usize) {
    let current = match field {
        1 => &profile.name,
        2 => &profile.surname,
        3 => &profile.document,
        4 => &profile.birth_date,
        5 => &profile.year,
        6 => &profile.affiliation,
        7 => &profile.city,
        8 => &profile.age,
        9 => &profile.pet,
        10 => &profile.partner,
        n => &profile.old_passwords[n - 11],
    }
    .clone();

    let Some(value) = get_editable_input("New value", &current) else {
        return;
    };
    let value = value.trim().to_string();

    match field {
        1 => profile.name = value,
        2 => profile.surname = value,
        3 => profile.document = value,
        4 => profile.set_birth_date(&value),
        5 => {
            profile.short_year.clear();
            profile.set_year(&value);
        }
        6 => profile.affiliation = value,
        7 => profile.city = value,
        8 => profile.age = value,
        9 => profile.pet = value,
        10 => profile.partner = value,
        n => profile.old_passwords[n - 11] = value,
    }
    profile.normalize();
}

fn update_words(settings: &Settings) {
    let mut input = WordsInput::default();
    let mut error: Option<String> = None;

    loop {
        print_words_menu(&input, error.as_deref());
        error = None;

        let Some(choice) = get_editable_input(enter_prompt(), "") else {
            break;
        };
        match choice.trim() {
            "" => break,
            "g" => match output_words(settings, &input) {
                Ok(()) => return,
                Err(e) => error = Some(e),
            },
            "1" => {
                if let Some(words) = get_editable_input("Base words, comma separated", &input.words) {
                    input.words = words.trim().to_string();
                }
            }
            "2" => {
                let current = input.forms.letters();
                if let Some(raw) = get_editable_input("Forms (u c l r s)", &current) {
                    match raw.parse::<WordForms>() {
                        Ok(forms) => {
                            input.forms = WordForms {
                                suffix: std::mem::take(&mut input.forms.suffix),
                                ..forms
                            }
                        }
                        Err(e) => error = Some(e.to_string()),
                    }
                }
            }
            "3" => {
                if let Some(suffix) = get_editable_input("Extra suffix", &input.forms.suffix) {
                    input.forms.suffix = suffix.trim().to_string();
                }
            }
            "4" => {
                if let Some(path) = get_editable_input("Wordlist file path", &input.wordlist) {
                    input.wordlist = path.trim().to_string();
                }
            }
            "c" => input = WordsInput::default(),
            _ => error = Some("Invalid input, please enter a valid menu option...".into()),
        }
    }
    clear();
}

fn update_relatives(relatives: &mut Vec<Relative>) {
    let mut error: Option<&str> = None;

    loop {
        print_relatives_menu(relatives, error.take());

        let Some(choice) = get_editable_input(enter_prompt(), "") else {
            break;
        };
        match choice.trim() {
            "" => break,
            "a" => {
                let Some(spec) = get_editable_input("NAME[:KIND[:YEAR]]", "") else {
                    continue;
                };
                match spec.trim().parse::<Relative>() {
                    Ok(rel) if !rel.name.is_empty() => relatives.push(rel),
                    _ => error = Some("A relative needs at least a name."),
                }
            }
            "c" => {
                for rel in relatives.iter_mut() {
                    rel.name.zeroize();
                }
                relatives.clear();
            }
            choice => match choice.parse::<usize>() {
                Ok(n) if (1..=relatives.len()).contains(&n) => {
                    let mut removed = relatives.remove(n - 1);
                    removed.name.zeroize();
                }
                _ => error = Some("Invalid input, please enter a valid menu option..."),
            },
        }
    }
    clear();
}

pub fn update_settings(settings: &mut Settings, profile: &Profile, relatives: &[Relative]) {
    let mut error: Option<String> = None;

    loop {
        print_settings_menu(settings, error.as_deref());
        error = None;

        let Some(choice) = get_editable_input(enter_prompt(), "") else {
            clear();
            break;
        };
        let choice = choice.trim();

        let action = match choice.parse::<usize>() {
            Ok(num) => menu_options(num, &mut error, settings),
            Err(_) => command_options(choice, &mut error, settings, profile, relatives),
        };
        if let Break = action {
            break;
        }
    }
}

fn read_bool(current: &mut bool, error: &mut Option<String>) {
    let Some(answer) = get_editable_input("Enter 't' or 'f'", "") else {
        return;
    };
    match answer.trim() {
        "" => {}
        "t" => *current = true,
        "f" => *current = false,
        _ => *error = Some("Invalid input, please enter 't' or 'f'...".into()),
    }
}

fn menu_options(choice: usize, error: &mut Option<String>, settings: &mut Settings) -> LoopAction {
    match choice {
        1 => {
            if let Some(n) = get_numeric_input("Shortest candidate", settings.min_len) {
                settings.min_len = n;
            }
        }
        2 => {
            if let Some(n) = get_numeric_input("Longest candidate", settings.max_len) {
                settings.max_len = n;
            }
        }
        3 => {
            if let Some(n) = get_numeric_input("Candidate ceiling (0: none)", settings.max_candidates)
            {
                settings.max_candidates = n;
            }
        }
        4 => {
            let current = usize::try_from(settings.doc_sweep_step).unwrap_or(usize::MAX);
            if let Some(n) = get_numeric_input("Document sweep step (0: off)", current) {
                settings.doc_sweep_step = n as u64;
            }
        }
        5 => {
            if let Some(n) = get_numeric_input("Relatives combined pairwise", settings.pair_cap) {
                settings.pair_cap = n;
            }
        }
        6 => read_bool(&mut settings.locale, error),
        7 => read_bool(&mut settings.full_nicknames, error),
        8 => read_bool(&mut settings.output_to_terminal, error),
        9 => {
            let Some(raw) =
                get_editable_input("Enter output file path", &settings.output_file_path)
            else {
                return Continue;
            };
            let path = match raw.trim() {
                "" => String::new(),
                p if p.ends_with('/') => format!("{p}persona.txt"),
                "." => "persona.txt".to_string(),
                p => p.to_string(),
            };
            settings.output_file_path = path;
        }
        10 => {
            let Some(command) = get_editable_input("Enter flags and values", &settings.cli_command)
            else {
                return Continue;
            };
            settings.cli_command = command.trim().to_string();
        }
        _ => *error = Some("Invalid input, please enter a valid menu option...".into()),
    }

    if settings.min_len > settings.max_len {
        *error = Some(format!(
            "Minimum length {} exceeds maximum length {}",
            settings.min_len, settings.max_len
        ));
    }
    Continue
}

fn command_options(
    choice: &str,
    error: &mut Option<String>,
    settings: &mut Settings,
    profile: &Profile,
    relatives: &[Relative],
) -> LoopAction {
    if choice.is_empty() {
        if settings.output_file_path.is_empty() && !settings.output_to_terminal {
            *error = Some("You must output to the terminal or a file.".into());
            return Continue;
        }
        if settings.min_len > settings.max_len {
            *error = Some("Minimum length exceeds maximum length.".into());
            return Continue;
        }
        clear();
        output_candidates(settings, profile, relatives);
        return Break;
    }

    if choice == "help" {
        clear();
        print_help();
        return Break;
    }

    if !choice.chars().all(|c| "serfd".contains(c)) {
        *error = Some("Invalid selection".into());
        return Continue;
    }

    for ch in choice.chars() {
        match ch {
            's' => {
                if let Err(e) = settings.save_to_file() {
                    *error = Some(format!("Error saving settings: {e}"));
                }
            }
            'r' => *settings = Settings::default(),
            'f' => match Settings::load_from_file() {
                Ok(s) => *settings = s,
                Err(e) => *error = Some(format!("Error loading settings: {e}")),
            },
            'd' => {
                let path = Path::new(&settings.output_file_path);
                if !settings.output_file_path.is_empty() && path.exists() {
                    match std::fs::remove_file(path) {
                        Ok(()) => {
                            clear();
                            box_top("Deleted");
                            box_line(&settings.output_file_path);
                            box_bottom();
                        }
                        Err(e) => *error = Some(format!("Error deleting file: {e}")),
                    }
                }
            }
            _ => {}
        }
    }

    if choice.contains('e') {
        clear();
        exit(0);
    }
    Continue
}
