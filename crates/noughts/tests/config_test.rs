//! Tests for loading game configuration from TOML.

use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use noughts::GameConfig;

#[test]
fn test_from_file_overrides_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("noughts.toml");
    fs::write(
        &path,
        r#"thinking_delay_ms = 20
log_filter = "noughts=debug"
show_hints = false
"#,
    )
    .expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.thinking_delay(), Duration::from_millis(20));
    assert_eq!(config.log_filter(), "noughts=debug");
    assert_eq!(config.log_file(), "noughts.log");
    assert!(!*config.show_hints());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config =
        GameConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults expected");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_from_file_missing_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "thinking_delay_ms = \"soon\"").expect("Failed to write TOML");

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_delay_override() {
    let config = GameConfig::default().with_thinking_delay_ms(5);
    assert_eq!(*config.thinking_delay_ms(), 5);
}
