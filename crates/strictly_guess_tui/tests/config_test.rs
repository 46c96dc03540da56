//! Config file loading and layering tests.

use std::io::Write;
use std::time::Duration;
use strictly_guess_tui::{AppConfig, Difficulty, GameArgs, GameSettings};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
difficulty = "hard"
seed = 42

[audio]
enabled = false
max_playback_ms = 1500

[log]
filter = "debug"
file = "game.log"
"#,
    );

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(*config.seed(), Some(42));
    assert!(!*config.audio().enabled());
    assert_eq!(config.audio().max_playback(), Duration::from_millis(1500));
    assert_eq!(config.log().filter(), "debug");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("[audio]\nenabled = false\n");
    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(config.audio().max_playback(), Duration::from_secs(3));
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = AppConfig::load(Some(&missing)).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_rejected() {
    let file = write_config("difficulty = \"impossible\"");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_custom_range_from_file() {
    let file = write_config("range = 250\nseed = 3\n");
    let config = AppConfig::from_file(file.path()).unwrap();
    let settings = GameSettings::resolve(&config, &GameArgs::default());
    assert_eq!(settings.range().get(), 250);
    assert_eq!(settings.difficulty(), None);
}
