use crate::profile::{Profile, Relative};
use crate::wordlist::WordForms;

/// What `-c/--command` asks for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommandMode {
    #[default]
    None,
    /// Save the other flags as the command run by a bare `persona`.
    Set,
    /// `-c` alone clears the saved command.
    Unset,
    /// `-c get` prints it.
    Get,
}

/// Profile fields given on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProfileFlags {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub document: Option<String>,
    pub birth: Option<String>,
    pub year: Option<String>,
    pub team: Option<String>,
    pub city: Option<String>,
    pub age: Option<String>,
    pub pet: Option<String>,
    pub partner: Option<String>,
    pub old: Vec<String>,
    pub relatives: Vec<String>,
    pub file: Option<String>,
}

impl ProfileFlags {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub default: bool,
    pub save: bool,
    pub no_locale: bool,
    pub full_nicks: bool,
    pub command: CommandMode,
    /// Log filter chosen with `--verbose`.
    pub verbose: Option<&'static str>,
    pub output: Option<String>,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub max_candidates: Option<usize>,
    pub pair_cap: Option<usize>,
    pub doc_sweep: Option<u64>,
    pub profile: ProfileFlags,
    /// `--words`: comma list of base words.
    pub words: Option<String>,
    pub word_forms: Option<WordForms>,
    pub suffix: Option<String>,
    /// `--from-wordlist`: file whose lines are expanded.
    pub wordlist: Option<String>,
}

impl CliFlags {
    /// True when the flags say something about this run beyond info and
    /// command bookkeeping.
    pub fn has_explicit_args(&self) -> bool {
        !self.profile.is_empty()
            || self.output.is_some()
            || self.min_len.is_some()
            || self.max_len.is_some()
            || self.max_candidates.is_some()
            || self.pair_cap.is_some()
            || self.doc_sweep.is_some()
            || self.saved
            || self.default
            || self.no_locale
            || self.full_nicks
            || self.clipboard
            || self.word_mode()
    }

    /// Expand words directly instead of profiling a target.
    pub fn word_mode(&self) -> bool {
        self.words.is_some() || self.wordlist.is_some()
    }
}

impl ProfileFlags {
    /// Overlay the command-line fields onto `profile` and append relatives.
    /// Returns the former passwords that found no free slot.
    pub fn apply(&self, profile: &mut Profile, relatives: &mut Vec<Relative>) -> Vec<String> {
        let text_fields = [
            (&self.name, &mut profile.name),
            (&self.surname, &mut profile.surname),
            (&self.document, &mut profile.document),
            (&self.team, &mut profile.affiliation),
            (&self.city, &mut profile.city),
            (&self.age, &mut profile.age),
            (&self.pet, &mut profile.pet),
            (&self.partner, &mut profile.partner),
        ];
        for (flag, field) in text_fields {
            if let Some(value) = flag {
                *field = value.trim().to_string();
            }
        }
        if let Some(birth) = &self.birth {
            profile.set_birth_date(birth);
        }
        if let Some(year) = &self.year {
            profile.set_year(year);
        }

        let rejected = self
            .old
            .iter()
            .filter(|pass| !profile.push_old_password(pass))
            .cloned()
            .collect();

        relatives.extend(
            self.relatives
                .iter()
                .filter_map(|spec| spec.parse::<Relative>().ok())
                .filter(|rel| !rel.name.is_empty()),
        );

        profile.normalize();
        rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_fields() {
        let mut profile = Profile {
            name: "juan".into(),
            city: "rosario".into(),
            ..Default::default()
        };
        let flags = ProfileFlags {
            name: Some(" Carlos ".into()),
            birth: Some("15031990".into()),
            relatives: vec!["ana:hija".into(), ":perro".into()],
            ..Default::default()
        };
        let mut relatives = Vec::new();
        let rejected = flags.apply(&mut profile, &mut relatives);
        assert!(rejected.is_empty());
        assert_eq!(profile.name, "Carlos");
        assert_eq!(profile.city, "rosario");
        assert_eq!(profile.year, "1990");
        assert_eq!(relatives.len(), 1);
    }

    #[test]
    fn extra_old_passwords_are_returned() {
        let mut profile = Profile::default();
        profile.push_old_password("a1");
        profile.push_old_password("b2");
        let flags = ProfileFlags {
            old: vec!["c3".into(), "d4".into()],
            ..Default::default()
        };
        let rejected = flags.apply(&mut profile, &mut Vec::new());
        assert_eq!(profile.old_passwords[2], "c3");
        assert_eq!(rejected, vec!["d4"]);
    }
}
