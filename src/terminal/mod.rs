//! Console helpers shared by the CLI and the interactive mode.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
