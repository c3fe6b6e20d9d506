use std::env;
use std::io::Write;
use std::process;

use log::Level;
use persona::settings::Settings;
use persona::{cli, exits, tui};

/// ANSI support: Unix terminals always, Windows only under an xterm-like TERM.
fn check_support_ansi() -> bool {
    if cfg!(windows) {
        return env::var("TERM").is_ok_and(|term| term.starts_with("xterm"));
    }
    true
}

/// Log to stderr so stdout carries only candidates. Timestamps at debug and
/// trace, `[*]`/`[!]` prefixes otherwise.
fn build_logger(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let mut binding = env_logger::Builder::from_env(env);
    let builder = if ["trace", "debug"].contains(&level) {
        binding.format(|buf, record| {
            let level = record.level();
            if !check_support_ansi() {
                return writeln!(buf, "[{} {}] {}", buf.timestamp(), level, record.args());
            }
            let color = match level {
                Level::Warn => "\x1B[0;33m",
                Level::Error => "\x1B[0;91m",
                _ => "\x1B[0;92m",
            };
            writeln!(
                buf,
                "[{} {color}{}\x1B[0;0m] {}",
                buf.timestamp(),
                level,
                record.args()
            )
        })
    } else {
        binding.format(|buf, record| {
            let ansi = check_support_ansi();
            let msg = match record.level() {
                Level::Warn | Level::Error if ansi => "\x1B[0;91m[!]\x1B[0;0m",
                Level::Warn | Level::Error => "[!]",
                _ if ansi => "\x1B[0;92m[*]\x1B[0;0m",
                _ => "[*]",
            };
            writeln!(buf, "{msg} {}", record.args())
        })
    }
    .target(env_logger::Target::Stderr);

    builder.init();
}

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();
    build_logger(cli::log_level(&args));

    match args.len() {
        1 if !Settings::has_saved_command() => tui::run(),
        _ => process::exit(cli::run(args)),
    }
}
