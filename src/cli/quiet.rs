//! Process-wide quiet flag.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Whether stdout is a terminal rather than a pipe or file.
pub fn stdout_is_terminal() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

/// No prompts when quiet or when stdin is not a terminal.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
