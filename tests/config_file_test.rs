//! Tests for loading configuration from disk.

use std::io::Write;
use strictly_heuristic::{GameConfig, GameMode};
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "mode = \"computer\"\ncomputer_delay_ms = 250\nseed = 42")
        .expect("Failed to write config");

    let config = GameConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(*config.mode(), GameMode::ComputerOpponent);
    assert_eq!(*config.computer_delay_ms(), 250);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_unknown_field_is_error() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "difficulty = \"hard\"").expect("Failed to write config");

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
