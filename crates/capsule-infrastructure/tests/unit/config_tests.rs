//! Configuration Loader Tests

use capsule_domain::Error;
use capsule_infrastructure::config::{AppConfig, ConfigLoader};
use capsule_infrastructure::constants::{DEFAULT_DETECT_CYCLES, DEFAULT_LOG_LEVEL};
use std::env;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("capsule.toml");
    std::fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.container.detect_cycles, DEFAULT_DETECT_CYCLES);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(temp_dir.path().join("absent.toml"));

    let config = loader.load().unwrap();
    assert!(config.container.detect_cycles);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_toml_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "[container]\ndetect_cycles = false\n\n[logging]\nlevel = \"debug\"\n",
    );

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert!(!config.container.detect_cycles);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json_format);
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[logging]\nlevel = \"loud\"\n");

    let error = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap_err();
    match error {
        Error::Configuration { message, .. } => assert!(message.contains("loud")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[container]\ndetect_cycles = \"sometimes\"\n");

    let error = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.container.detect_cycles = false;
    original.logging.json_format = true;

    let loader = ConfigLoader::new().with_config_path(&config_path);
    loader.save_to_file(&original, &config_path).unwrap();
    assert_eq!(loader.config_path(), Some(config_path.as_path()));

    let loaded = loader.load().unwrap();
    assert!(!loaded.container.detect_cycles);
    assert!(loaded.logging.json_format);
}

/// Run with: `cargo test -p capsule-infrastructure --test unit -- --ignored --test-threads=1`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_vars_override_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[container]\ndetect_cycles = true\n");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("CAPSULE_TEST__CONTAINER__DETECT_CYCLES", "false");
    }
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("CAPSULE_TEST")
        .load();
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("CAPSULE_TEST__CONTAINER__DETECT_CYCLES");
    }

    assert!(!config.unwrap().container.detect_cycles);
}
