use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use vibenotes::config::{Config, ConfigError};
use vibenotes::storage::PersistOptions;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.storage.path, None);
    assert!(config.storage.persist_search_query);
    assert!(config.storage.persist_active_folder);
    assert_eq!(config.editor.autosave_debounce_ms, 500);
    assert_eq!(config.editor.tick_rate_ms, 250);
    assert_eq!(config.export.directory, None);

    assert_eq!(config.autosave_debounce(), Duration::from_millis(500));
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.export_dir(), PathBuf::from("."));
    assert!(config.storage_path().ends_with("vibenotes/vibenotes-storage.json"));
    assert_eq!(config.storage.persist_options(), PersistOptions::default());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("vibenotes/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"
[editor]
autosave_debounce_ms = 1200
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.editor.autosave_debounce_ms, 1200);
    assert_eq!(config.editor.tick_rate_ms, 250);
    assert!(config.storage.persist_search_query);
}

#[test]
fn test_full_file_is_applied() {
    let (dir, path) = write_config(
        r#"
[storage]
path = "/srv/notes/notes.json"
persist_search_query = false
persist_active_folder = true

[editor]
autosave_debounce_ms = 750
tick_rate_ms = 100

[export]
directory = "/srv/exports"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    drop(dir);

    assert_eq!(config.storage_path(), PathBuf::from("/srv/notes/notes.json"));
    assert_eq!(config.export_dir(), PathBuf::from("/srv/exports"));
    assert_eq!(config.tick_rate(), Duration::from_millis(100));
    assert_eq!(
        config.storage.persist_options(),
        PersistOptions {
            search_query: false,
            active_folder: true,
        }
    );
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[editor\nautosave_debounce_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {:?}", err);
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let (_dir, path) = write_config("[editor]\ntick_rate_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_debounce_out_of_range_fails_validation() {
    let (_dir, path) = write_config("[editor]\nautosave_debounce_ms = 10\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("autosave_debounce_ms"));
}

#[test]
fn test_tick_rate_out_of_range_fails_validation() {
    let mut config = Config::default();
    config.editor.tick_rate_ms = 10_000;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_storage_path_pointing_at_directory_fails_validation() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.storage.path = Some(dir.path().to_path_buf());
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_unreadable_path_is_a_read_error() {
    // A directory exists but cannot be read as a file.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::create_dir(&path).unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ReadError { .. })
    ));
}
