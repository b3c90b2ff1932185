//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::TestFixture;
use crate::adt::{ListKind, MapKind};
use crate::config::{AdtKitConfig, ConfigLoader, LogConfig, TablesConfig, Validate, WorkloadConfig};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AdtKitConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.tables.map_kind().unwrap(), MapKind::SeparateChaining);
    assert_eq!(config.tables.list_kind().unwrap(), ListKind::ArrayList);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = AdtKitConfig::default();

    config.tables.map = "Trie".to_string();
    assert!(config.validate().is_err());

    config.tables.map = "LinearProbing".to_string();
    config.tables.probing_load_factor = 1.0;
    assert!(config.validate().is_err());

    config.tables.probing_load_factor = 0.75;
    config.workload.key_count = 0;
    assert!(config.validate().is_err());

    config.workload.key_count = 100;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test the validation rules of each section on its own.
#[test]
fn test_specific_validation_rules() {
    let tables = TablesConfig {
        prime: 1_000,
        ..TablesConfig::default()
    };
    assert!(matches!(
        tables.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    let tables = TablesConfig {
        chaining_load_factor: -2.0,
        ..TablesConfig::default()
    };
    assert!(tables.validate().is_err());

    let tables = TablesConfig {
        chaining_load_factor: 1e-300,
        ..TablesConfig::default()
    };
    assert!(matches!(
        tables.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    let tables = TablesConfig {
        expected_elements: 1_000,
        prime: 101,
        ..TablesConfig::default()
    };
    assert!(tables.validate().is_err());

    let tables = TablesConfig {
        list: "Rope".to_string(),
        ..TablesConfig::default()
    };
    assert!(tables.validate().is_err());

    let workload = WorkloadConfig {
        key_count: 10,
        remove_every: 11,
        ..WorkloadConfig::default()
    };
    assert!(workload.validate().is_err());

    assert!(LogConfig::default().validate().is_ok());
}

/// Test that the table section maps onto the hash table configuration.
#[test]
fn test_hash_table_config_from_tables() {
    let tables = TablesConfig {
        expected_elements: 100,
        seed: Some(5),
        ..TablesConfig::default()
    };

    let chaining = tables.hash_table_config(MapKind::SeparateChaining);
    assert_eq!(chaining.max_load_factor, 4.0);
    assert_eq!(chaining.initial_capacity(), Some(29));
    assert_eq!(chaining.seed, Some(5));

    let probing = tables.hash_table_config(MapKind::LinearProbing);
    assert_eq!(probing.max_load_factor, 0.5);
    assert_eq!(probing.initial_capacity(), Some(211));
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_file_test.toml",
            r#"
            [tables]
            map = "LinearProbing"
            expected_elements = 64
            seed = 17

            [workload]
            key_count = 250
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.tables.map, "LinearProbing");
    assert_eq!(config.tables.expected_elements, 64);
    assert_eq!(config.tables.seed, Some(17));
    assert_eq!(config.workload.key_count, 250);

    // Other values should be defaults
    assert_eq!(config.tables.list, "ArrayList");
    assert_eq!(config.workload.remove_every, 5);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("config.json", r#"{ "log": { "level": "warn", "json": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert_eq!(config.log.level, "warn");
    assert!(config.log.json);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_env_test.toml",
            r#"
            [tables]
            map = "LinearProbing"
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__TABLES__MAP", "SeparateChaining");
    fixture.set_env("TEST_ENV__WORKLOAD__KEY_COUNT", "42");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.tables.map, "SeparateChaining");
    assert_eq!(config.workload.key_count, 42);
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");

    let result = ConfigLoader::new(Some(&path), "TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(p)) if p == path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("invalid.toml", "[tables\nmap = LinearProbing\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that a file with an unsupported extension is rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.write_file("config.ini.bak", "").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that the generated default configuration loads back unchanged.
#[test]
fn test_generated_config_round_trip() {
    let fixture = TestFixture::new().unwrap();
    let toml = AdtKitConfig::default().to_toml().unwrap();
    let config_path = fixture.write_file("generated.toml", &toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GENERATED").load().unwrap();
    assert_eq!(config.tables.map, "SeparateChaining");
    assert_eq!(config.tables.prime, crate::utils::DEFAULT_PRIME);
    assert_eq!(config.workload.key_count, WorkloadConfig::default().key_count);
}
