use persona::cli::profile_file;
use persona::cli::{CommandMode, ParseError, parse};
use persona::profile::Profile;

fn args(line: &str) -> Vec<String> {
    std::iter::once("persona")
        .chain(line.split_whitespace())
        .map(String::from)
        .collect()
}

#[test]
fn flags_build_the_same_profile_as_a_file() {
    let flags = parse(&args(
        "--name Carlos --surname Gomez --birth 15031990 --team River --relative Ana:hija:2015",
    ))
    .unwrap();
    let mut from_flags = Profile::default();
    let mut rels_from_flags = Vec::new();
    flags.profile.apply(&mut from_flags, &mut rels_from_flags);

    let (from_file, rels_from_file) = profile_file::parse_str(
        "name = Carlos\nsurname = Gomez\nbirth = 15031990\nteam = River\nrelative = Ana:hija:2015\n",
    )
    .unwrap();

    assert_eq!(from_flags, from_file);
    assert_eq!(rels_from_flags, rels_from_file);
}

#[test]
fn command_mode_and_errors() {
    assert_eq!(parse(&args("-c get")).unwrap().command, CommandMode::Get);
    assert_eq!(
        parse(&args("--pair-cap")).unwrap_err(),
        ParseError::MissingValue("--pair-cap".into())
    );
}
