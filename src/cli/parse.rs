use std::str::FromStr;

use thiserror::Error;

use super::{CliFlags, CommandMode};
use crate::ident::DEFAULT_SWEEP_STEP;
use crate::wordlist::WordForms;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("invalid verbose level: {0} (expected 1-4)")]
    InvalidVerbose(String),
    #[error("at most three --old passwords")]
    TooManyOld,
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("invalid --word-forms {0:?} (expected letters from `uclrs`)")]
    InvalidWordForms(String),
    #[error("--words and --from-wordlist cannot be combined with profile flags")]
    MixedModes,
    #[error("{0} only applies with --words")]
    WordsOnly(&'static str),
}

/// Verbose levels 1-4 map to warn, info, debug and trace.
fn verbose_level(raw: &str) -> Result<&'static str, ParseError> {
    match raw {
        "1" => Ok("warn"),
        "2" => Ok("info"),
        "3" => Ok("debug"),
        "4" => Ok("trace"),
        other => Err(ParseError::InvalidVerbose(other.to_string())),
    }
}

fn has_value(args: &[String], i: usize) -> bool {
    i + 1 < args.len() && !args[i + 1].starts_with('-')
}

fn value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let flag = args[*i].clone();
    let raw = value(args, i)?;
    raw.replace(['_', ','], "")
        .parse()
        .map_err(|_| ParseError::InvalidNumber { flag, value: raw })
}

/// Parse `args` (program name at index 0) into flags.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "--save" => flags.save = true,
            "--no-locale" => flags.no_locale = true,
            "--full-nicks" => flags.full_nicks = true,
            "--verbose" => {
                flags.verbose = Some(if has_value(args, i) {
                    i += 1;
                    verbose_level(&args[i])?
                } else {
                    "info"
                });
            }
            "-c" | "--command" => {
                flags.command = if i + 1 == args.len() {
                    CommandMode::Unset
                } else if args[i + 1] == "get" {
                    i += 1;
                    CommandMode::Get
                } else {
                    CommandMode::Set
                };
            }
            "-o" | "--output" => {
                if has_value(args, i) {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            "--min-len" => flags.min_len = Some(number(args, &mut i)?),
            "--max-len" => flags.max_len = Some(number(args, &mut i)?),
            "-n" | "--max" => flags.max_candidates = Some(number(args, &mut i)?),
            "--pair-cap" => flags.pair_cap = Some(number(args, &mut i)?),
            "--doc-sweep" => {
                flags.doc_sweep = Some(if has_value(args, i) {
                    number(args, &mut i)?
                } else {
                    DEFAULT_SWEEP_STEP
                });
            }
            "--name" => flags.profile.name = Some(value(args, &mut i)?),
            "--surname" => flags.profile.surname = Some(value(args, &mut i)?),
            "--doc" => flags.profile.document = Some(value(args, &mut i)?),
            "--birth" => flags.profile.birth = Some(value(args, &mut i)?),
            "--year" => flags.profile.year = Some(value(args, &mut i)?),
            "--team" => flags.profile.team = Some(value(args, &mut i)?),
            "--city" => flags.profile.city = Some(value(args, &mut i)?),
            "--age" => flags.profile.age = Some(value(args, &mut i)?),
            "--pet" => flags.profile.pet = Some(value(args, &mut i)?),
            "--partner" => flags.profile.partner = Some(value(args, &mut i)?),
            "--old" => {
                if flags.profile.old.len() == 3 {
                    return Err(ParseError::TooManyOld);
                }
                let pass = value(args, &mut i)?;
                flags.profile.old.push(pass);
            }
            "--relative" => {
                let spec = value(args, &mut i)?;
                flags.profile.relatives.push(spec);
            }
            "--profile" => flags.profile.file = Some(value(args, &mut i)?),
            "--words" => flags.words = Some(value(args, &mut i)?),
            "--word-forms" => {
                let raw = value(args, &mut i)?;
                let forms = raw
                    .parse::<WordForms>()
                    .map_err(|_| ParseError::InvalidWordForms(raw))?;
                flags.word_forms = Some(forms);
            }
            "--suffix" => flags.suffix = Some(value(args, &mut i)?),
            "--from-wordlist" => flags.wordlist = Some(value(args, &mut i)?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if flags.word_mode() && !flags.profile.is_empty() {
        return Err(ParseError::MixedModes);
    }
    if flags.words.is_none() {
        if flags.word_forms.is_some() {
            return Err(ParseError::WordsOnly("--word-forms"));
        }
        if flags.suffix.is_some() {
            return Err(ParseError::WordsOnly("--suffix"));
        }
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("persona")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn profile_and_generation_flags() {
        let f = parse(&args(
            "--name carlos --year 1990 --relative ana:hija:2015 --old river1 -n 500 --min-len 6",
        ))
        .unwrap();
        assert_eq!(f.profile.name.as_deref(), Some("carlos"));
        assert_eq!(f.profile.year.as_deref(), Some("1990"));
        assert_eq!(f.profile.relatives, vec!["ana:hija:2015"]);
        assert_eq!(f.profile.old, vec!["river1"]);
        assert_eq!(f.max_candidates, Some(500));
        assert_eq!(f.min_len, Some(6));
        assert!(f.has_explicit_args());
    }

    #[rstest]
    #[case("-o", Some("."))]
    #[case("-o list.txt", Some("list.txt"))]
    #[case("-o -q", Some("."))]
    fn output_value_is_optional(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse(&args(line)).unwrap().output.as_deref(), expected);
    }

    #[test]
    fn doc_sweep_defaults_its_step() {
        assert_eq!(
            parse(&args("--doc-sweep")).unwrap().doc_sweep,
            Some(DEFAULT_SWEEP_STEP)
        );
        assert_eq!(parse(&args("--doc-sweep 10_000")).unwrap().doc_sweep, Some(10_000));
    }

    #[rstest]
    #[case("", None)]
    #[case("--verbose", Some("info"))]
    #[case("--verbose 3", Some("debug"))]
    #[case("--verbose 4 --name x", Some("trace"))]
    fn verbose_levels(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse(&args(line)).unwrap().verbose, expected);
    }

    #[rstest]
    #[case("-c", CommandMode::Unset)]
    #[case("-c get", CommandMode::Get)]
    #[case("-c --name carlos", CommandMode::Set)]
    fn command_modes(#[case] line: &str, #[case] mode: CommandMode) {
        assert_eq!(parse(&args(line)).unwrap().command, mode);
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args("--bogus")).unwrap_err(),
            ParseError::UnknownArg("--bogus".into())
        );
        assert_eq!(
            parse(&args("--name")).unwrap_err(),
            ParseError::MissingValue("--name".into())
        );
        assert!(matches!(
            parse(&args("-n lots")).unwrap_err(),
            ParseError::InvalidNumber { .. }
        ));
        assert_eq!(
            parse(&args("--verbose 9")).unwrap_err(),
            ParseError::InvalidVerbose("9".into())
        );
        assert_eq!(
            parse(&args("--old a --old b --old c --old d")).unwrap_err(),
            ParseError::TooManyOld
        );
    }

    #[test]
    fn word_mode_flags() {
        let f = parse(&args("--words carlos,boca --word-forms lr --suffix 2024 -o")).unwrap();
        assert_eq!(f.words.as_deref(), Some("carlos,boca"));
        assert_eq!(f.word_forms.as_ref().map(|w| w.letters()), Some("lr".to_string()));
        assert_eq!(f.suffix.as_deref(), Some("2024"));
        assert!(f.word_mode());

        let f = parse(&args("--from-wordlist base.txt")).unwrap();
        assert_eq!(f.wordlist.as_deref(), Some("base.txt"));
        assert!(f.has_explicit_args());
    }

    #[rstest]
    #[case("--words a,b --name carlos", ParseError::MixedModes)]
    #[case("--from-wordlist l.txt --relative ana", ParseError::MixedModes)]
    #[case("--words a --word-forms xyz", ParseError::InvalidWordForms("xyz".into()))]
    #[case("--from-wordlist l.txt --suffix 1", ParseError::WordsOnly("--suffix"))]
    #[case("--word-forms u", ParseError::WordsOnly("--word-forms"))]
    fn word_mode_errors(#[case] line: &str, #[case] expected: ParseError) {
        assert_eq!(parse(&args(line)).unwrap_err(), expected);
    }

    #[test]
    fn info_flags_are_not_explicit() {
        assert!(!parse(&args("-h -q")).unwrap().has_explicit_args());
    }
}
