use leaf::config::{Config, ConfigError};
use leaf::ui::notes::FieldLimits;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.storage.notes_dir.is_none());
    assert_eq!(config.editor.title_char_limit, 100);
    assert_eq!(config.editor.content_char_limit, 10_000);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert_eq!(config.field_limits(), FieldLimits::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("leaf/config.toml"));
}

#[test]
fn test_default_notes_dir_is_under_dot_leaf() {
    let config = Config::default();
    assert!(config.notes_dir().ends_with(".leaf/notes"));
    assert!(config.log_file_path().ends_with("leaf/leaf.log"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_sections_fill_in_defaults() {
    let (_dir, path) = write_config(
        r#"
[storage]
notes_dir = "/tmp/my-notes"

[editor]
title_char_limit = 40
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.notes_dir(), PathBuf::from("/tmp/my-notes"));
    assert_eq!(
        config.field_limits(),
        FieldLimits {
            title: 40,
            content: 10_000,
        }
    );
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_logging_section() {
    let (_dir, path) = write_config(
        r#"
[logging]
level = "leaf=debug"
file = "/tmp/leaf-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logging.level, "leaf=debug");
    assert_eq!(config.log_file_path(), PathBuf::from("/tmp/leaf-test.log"));
}

#[test]
fn test_validation_rejects_zero_limits() {
    let (_dir, path) = write_config("[editor]\ncontent_char_limit = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("content_char_limit"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut config = Config::default();
    config.editor.title_char_limit = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_bad_log_level() {
    let mut config = Config::default();
    config.logging.level = "leaf=loudest".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[editor\ntitle_char_limit = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[editor]\ntitle_char_limit = \"many\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
