mod common;

use std::fs;
use tempfile::TempDir;
use gamestats_actix::config::enums::storage_encoding::StorageEncoding;
use gamestats_actix::config::structs::configuration::Configuration;

#[test]
fn test_config_default_values() {
    let config = Configuration::init();
    assert_eq!(config.statistics.max_report_size, 50);
    assert_eq!(config.statistics.default_report_count, 5);
    assert_eq!(config.statistics.best_players_min_matches, 10);
    assert_eq!(config.statistics.top_entries_size, 5);
    assert!(config.storage.bucket_count > 0, "Bucket count should be positive");
    assert!(config.validate().is_ok(), "Defaults should validate");
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "debug"

[storage]
path = "/var/lib/gamestats"
bucket_count = 128
encoding = "json"
keep_matches_in_memory = true

[statistics]
max_report_size = 20
default_report_count = 3
best_players_min_matches = 4
top_entries_size = 3

[api_server]
enabled = true
bind_address = "127.0.0.1:9000"
keep_alive = 10
request_timeout = 5
disconnect_timeout = 5
threads = 2
max_body_size = 4096
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).expect("config should load");
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.storage.bucket_count, 128);
    assert_eq!(config.storage.encoding, StorageEncoding::json);
    assert!(config.storage.keep_matches_in_memory);
    assert_eq!(config.statistics.best_players_min_matches, 4);
    assert_eq!(config.api_server.max_body_size, 4096);
}

#[test]
fn test_config_missing_file_is_created_on_request() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    assert!(Configuration::load_from_file(path, false).is_err());
    assert!(!config_path.exists(), "Config should not be written without the create flag");

    assert!(Configuration::load_from_file(path, true).is_err(), "A freshly created config still asks for a restart");
    assert!(config_path.exists());

    let created = Configuration::load_file(path).expect("created config should parse");
    assert_eq!(created.statistics.max_report_size, Configuration::init().statistics.max_report_size);
}

#[test]
fn test_config_validation_rejects_zero_buckets() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut config = Configuration::init();
    config.storage.bucket_count = 0;
    Configuration::save_from_config(config_path.to_str().unwrap(), &config).unwrap();

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
}

#[test]
fn test_config_used_by_manager() {
    let dir = common::create_temp_dir();
    let config = common::create_test_config(&dir);
    assert!(config.validate().is_ok());
    let manager = common::create_test_manager(&dir);
    assert_eq!(manager.clamp_report_count(1000), config.statistics.max_report_size as usize);
}

#[test]
fn test_config_unknown_log_level_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut config = Configuration::init();
    config.log_level = String::from("inf");
    Configuration::save_from_config(config_path.to_str().unwrap(), &config).unwrap();

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
}
