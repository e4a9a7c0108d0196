//! Loading configuration from disk.

use noughts_crosses::Player;
use noughts_crosses_cli::AppConfig;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "nought_symbol = \"@\"\ncross_symbol = \"#\"\nshow_position_hints = false\nlog_filter = \"debug\"\nlog_file = \"noughts.log\""
    )
    .expect("write config");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.symbol(Player::Nought), "@");
    assert_eq!(config.symbol(Player::Cross), "#");
    assert!(!*config.show_position_hints());
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file(), &Some(PathBuf::from("noughts.log")));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_position_hints = \"maybe\"").expect("write config");

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
