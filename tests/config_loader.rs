use state_hoisting::config::{Config, ConfigError};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.ui.title, "STATE HOISTING");
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert!(config.ui.mouse);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn empty_file_yields_defaults() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn partial_sections_fill_in_defaults() {
    let (_dir, path) = write_config(
        r#"
[ui]
title = "COUNTER"

[logging]
file = "/var/tmp/counter.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.title, "COUNTER");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/var/tmp/counter.log"))
    );
}

#[test]
fn full_file_round_trips_values() {
    let (_dir, path) = write_config(
        r#"
[ui]
title = "T"
tick_rate_ms = 40
mouse = false

[logging]
level = "state_hoisting=trace"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 40);
    assert!(!config.ui.mouse);
    assert_eq!(config.logging.level, "state_hoisting=trace");
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\ntitle = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn blank_log_level_fails_validation() {
    let mut config = Config::default();
    config.logging.level = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn unreadable_path_is_read_error() {
    // A directory exists but cannot be read as a file.
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
