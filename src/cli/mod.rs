//! Command-line front end.

mod context;
mod flags;
mod parse;
pub mod profile_file;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::{CliFlags, CommandMode, ProfileFlags};
pub use parse::{ParseError, parse};

/// Log filter requested on the command line, `warn` otherwise.
pub fn log_level(args: &[String]) -> &'static str {
    parse(args).ok().and_then(|f| f.verbose).unwrap_or("warn")
}

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run with --help for usage.");
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Done::Early) => 0,
        Err(Done::Failed) => 1,
    }
}
