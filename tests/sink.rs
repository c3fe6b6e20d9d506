use std::fs;

use persona::settings::Settings;
use persona::sink::{Sink, SinkError, WriteMode};
use persona::{Generator, Profile, Tables};
use tempfile::tempdir;

#[test]
fn generated_list_lands_on_disk_one_per_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lists/ana.txt");

    let profile = Profile {
        name: "Ana".into(),
        ..Default::default()
    };
    let settings = Settings {
        max_candidates: 50,
        ..Settings::default()
    };
    let generator = Generator::new(Tables::default(), &settings);
    let expected = generator.generate(&profile, &[]);

    let mut sink = Sink::file(&path, WriteMode::Create).unwrap();
    sink.drain(generator.candidates(&profile, &[])).unwrap();
    assert_eq!(sink.finish().unwrap(), 50);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn existing_file_is_protected_unless_asked() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.txt");
    fs::write(&path, "keep\n").unwrap();

    assert!(matches!(
        Sink::file(&path, WriteMode::Create),
        Err(SinkError::Exists { .. })
    ));

    let mut sink = Sink::file(&path, WriteMode::Append).unwrap();
    sink.push("more").unwrap();
    sink.finish().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep\nmore\n");
}

#[test]
fn settings_round_trip_through_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings");
    let settings = Settings {
        max_len: 16,
        pair_cap: 3,
        full_nicknames: true,
        output_to_terminal: false,
        output_file_path: "out|put.txt".into(),
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}
