//! Configuration loading tests
//!
//! Tests that set environment variables are `#[ignore]`d; run them with
//! `cargo test -p school-infrastructure --test unit -- --ignored --test-threads=1`.

use school_application::PagingPolicy;
use school_domain::Error;
use school_infrastructure::config::{AppConfig, ConfigLoader, PaginationConfig};
use school_infrastructure::config::loader::validate_app_config;
use std::env;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".toml").expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert_eq!(config.pagination.default_page_size, 10);
    assert_eq!(config.pagination.max_page_size, 100);
    assert_eq!(config.storage.provider, "memory");
}

#[test]
fn test_load_from_toml_file() {
    let file = write_config(
        r#"
[logging]
level = "debug"
json_format = true

[pagination]
default_page_size = 25
max_page_size = 50
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("SCHOOL_TEST_TOML")
        .load()
        .expect("config should load");

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert_eq!(config.pagination.default_page_size, 25);
    assert_eq!(config.pagination.max_page_size, 50);
    // Untouched section keeps its default
    assert_eq!(config.storage.provider, "memory");
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("SCHOOL_TEST_MISSING")
        .load()
        .expect("defaults should load");

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_log_level_rejected() {
    let file = write_config("[logging]\nlevel = \"loud\"\njson_format = false\n");

    let result = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("SCHOOL_TEST_LEVEL")
        .load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_malformed_toml_rejected() {
    let file = write_config("[pagination]\ndefault_page_size = \"many\"\n");

    let result = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("SCHOOL_TEST_MALFORMED")
        .load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_validate_zero_default_page_size() {
    let mut config = AppConfig::default();
    config.pagination.default_page_size = 0;

    let err = validate_app_config(&config).expect_err("zero page size must fail");
    assert!(err.message().contains("Default page size"));
}

#[test]
fn test_validate_max_below_default() {
    let mut config = AppConfig::default();
    config.pagination = PaginationConfig {
        default_page_size: 20,
        max_page_size: 5,
    };

    assert!(matches!(
        validate_app_config(&config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_pagination_config_into_policy() {
    let policy = PagingPolicy::from(PaginationConfig {
        default_page_size: 15,
        max_page_size: 40,
    });

    assert_eq!(policy.default_page_size(), 15);
    assert_eq!(policy.max_page_size(), 40);
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("school.toml");
    let loader = ConfigLoader::new().with_env_prefix("SCHOOL_TEST_SAVE");

    let mut config = AppConfig::default();
    config.logging.level = "warn".to_string();
    config.pagination.default_page_size = 30;
    loader.save_to_file(&config, &path).expect("save should work");

    let reloaded = loader
        .with_config_path(&path)
        .load()
        .expect("saved config should load");
    assert_eq!(reloaded, config);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("school.toml");

    let result = ConfigLoader::new().save_to_file(&AppConfig::default(), &path);

    assert!(matches!(result, Err(Error::Internal { .. })));
}

#[test]
fn test_config_path_accessor() {
    assert!(ConfigLoader::new().config_path().is_none());

    let loader = ConfigLoader::new().with_config_path("/tmp/school.toml");
    assert_eq!(
        loader.config_path().map(|p| p.to_string_lossy().into_owned()),
        Some("/tmp/school.toml".to_string())
    );
}

// Helper functions for environment variable manipulation in tests
// These are unsafe in Rust 2024 edition due to potential data races

#[allow(unsafe_code)]
fn set_env_var(key: &str, value: &str) {
    // SAFETY: only called from single-threaded ignored tests
    unsafe { env::set_var(key, value) };
}

#[allow(unsafe_code)]
fn remove_env_var(key: &str) {
    // SAFETY: only called from single-threaded ignored tests
    unsafe { env::remove_var(key) };
}

#[test]
#[ignore = "Modifies process environment; run with --test-threads=1"]
fn test_env_overrides_file() {
    let file = write_config("[logging]\nlevel = \"debug\"\njson_format = false\n");
    set_env_var("SCHOOL_ENV_LOGGING__LEVEL", "error");
    set_env_var("SCHOOL_ENV_PAGINATION__MAX_PAGE_SIZE", "200");

    let result = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("SCHOOL_ENV")
        .load();

    remove_env_var("SCHOOL_ENV_LOGGING__LEVEL");
    remove_env_var("SCHOOL_ENV_PAGINATION__MAX_PAGE_SIZE");

    let config = result.expect("config should load");
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.pagination.max_page_size, 200);
}
