//! Integration tests for loading logger configs from disk.

use std::fs;
use tempfile::TempDir;
use typelog_config::{ConfigError, LoggerConfig, TypeConfig};

#[test]
fn load_yaml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("typelog.yaml");
    fs::write(
        &path,
        "colors: false\ntypes:\n  - name: log\n    color: 36m\n  - name: error\n    color: 31m\n",
    )
    .unwrap();

    let config = LoggerConfig::load(&path).unwrap();
    assert!(!config.colors);
    assert_eq!(
        config.types,
        vec![
            TypeConfig::new("log", Some("36m")),
            TypeConfig::new("error", Some("31m")),
        ]
    );
}

#[test]
fn load_toml_file_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("typelog.TOML");
    fs::write(&path, "[[types]]\nname = \"done\"\ncolor = \"32m\"\n").unwrap();

    let config = LoggerConfig::load(&path).unwrap();
    assert_eq!(config.types, vec![TypeConfig::new("done", Some("32m"))]);
    assert!(config.colors);
}

#[test]
fn load_missing_file_reports_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.yaml");

    let err = LoggerConfig::load(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io(_))
    ));
    assert!(format!("{err:#}").contains("absent.yaml"));
}

#[test]
fn load_rejects_duplicate_types() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dupes.yaml");
    fs::write(&path, "types:\n  - name: log\n  - name: log\n").unwrap();

    let err = LoggerConfig::load(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn load_reports_toml_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "types = [[[").unwrap();

    let err = LoggerConfig::load(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Toml(_))
    ));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent").join("config.yaml");

    let config = LoggerConfig::load_or_default(&path).unwrap();
    assert_eq!(config, LoggerConfig::default());
}

#[test]
fn existing_file_is_loaded_instead_of_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "types:\n  - name: trace\n").unwrap();

    let config = LoggerConfig::load_or_default(&path).unwrap();
    assert_eq!(config.types, vec![TypeConfig::new("trace", None)]);
}

#[test]
fn default_path_lives_under_typelog_dir() {
    let path = LoggerConfig::default_path();
    assert!(path.ends_with("config.yaml"));
    if dirs::config_dir().is_some() {
        assert!(path.ends_with("typelog/config.yaml"));
    }
}

#[test]
fn load_default_succeeds() {
    // Either the user's file or the empty defaults; never an error for a
    // missing file.
    let config = LoggerConfig::load_default();
    if !LoggerConfig::default_path().exists() {
        assert_eq!(config.unwrap(), LoggerConfig::default());
    }
}

#[test]
fn apply_env_reads_the_process_environment() {
    let mut from_process = LoggerConfig::default();
    from_process.apply_env();

    let mut from_lookup = LoggerConfig::default();
    from_lookup.apply_env_with(|key| std::env::var(key).ok());
    assert_eq!(from_process.colors, from_lookup.colors);
}
