//! Interactive mode: profile collection, settings and generation menus.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

pub fn run() {
    gen_main_menu();
}
