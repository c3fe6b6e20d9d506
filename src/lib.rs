//! Targeted password-candidate generation from a biographical profile.
//!
//! ```
//! use persona::{Generator, Profile, Settings, Tables};
//!
//! let mut profile = Profile {
//!     name: "Carlos".into(),
//!     ..Default::default()
//! };
//! profile.set_year("1990");
//!
//! let generator = Generator::new(Tables::default(), &Settings::default());
//! let candidates = generator.generate(&profile, &[]);
//! assert!(candidates.iter().any(|c| c == "carlos1990"));
//! ```

pub mod cli;
pub mod engine;
pub mod exits;
pub mod ident;
pub mod locale;
pub mod nickname;
pub mod profile;
pub mod rules;
pub mod settings;
pub mod sink;
pub mod terminal;
pub mod transform;
pub mod tui;
pub mod unique;
pub mod wordlist;

pub use engine::{Candidates, Generator, Stage, Tables};
pub use profile::{Atom, AtomKind, Profile, RelationKind, Relative};
pub use settings::Settings;
