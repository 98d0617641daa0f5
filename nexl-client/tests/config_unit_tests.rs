//! Unit tests for configuration parsing and validation
//!
//! These tests verify that `nexl.toml` is parsed correctly, defaults fill
//! in missing values, and validation rules are enforced.

mod common;

use nexl_client::{ConfigManager, NexlConfig};

use common::fixtures::*;

#[test]
fn test_parse_full_config() {
    let config = ConfigManager::parse(
        r#"
base_url = "http://nexl.internal:9191"
connect_timeout_seconds = 5
request_timeout_seconds = 20
user_agent = "config-central/2.0"
max_concurrent_calls = 4

[provider]
enabled = false
fallback = true
"#,
    )
    .unwrap();

    assert_eq!(config.base_url, "http://nexl.internal:9191");
    assert_eq!(config.connect_timeout_seconds, 5);
    assert_eq!(config.request_timeout_seconds, 20);
    assert_eq!(config.user_agent, "config-central/2.0");
    assert_eq!(config.max_concurrent_calls, 4);
    assert!(!config.provider.enabled);
    assert!(config.provider.fallback);
}

#[test]
fn test_parse_partial_config_uses_defaults() {
    let config = ConfigManager::parse(r#"base_url = "http://localhost:8181""#).unwrap();

    assert_eq!(
        config,
        NexlConfig {
            base_url: "http://localhost:8181".to_string(),
            ..NexlConfig::default()
        }
    );
}

#[test]
fn test_parse_rejects_wrong_types() {
    let err = ConfigManager::parse("max_concurrent_calls = \"many\"").unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config"));
}

#[tokio::test]
async fn test_load_from_config_dir() {
    let dir = TestConfigDir::with_file(
        r#"
base_url = "http://nexl.test:8181"
request_timeout_seconds = 12
"#,
    );

    let manager = ConfigManager::new(dir.path_string()).await.unwrap();
    let config = manager.get_current_config();

    assert_eq!(config.base_url, "http://nexl.test:8181");
    assert_eq!(config.request_timeout_seconds, 12);
    assert_eq!(config.connect_timeout_seconds, 10);
}

#[tokio::test]
async fn test_missing_file_falls_back_to_defaults() {
    let dir = TestConfigDir::empty();

    let manager = ConfigManager::new(dir.path_string()).await.unwrap();

    assert_eq!(*manager.get_current_config(), NexlConfig::default());
}

#[tokio::test]
async fn test_invalid_values_fail_loading() {
    let dir = TestConfigDir::with_file("request_timeout_seconds = 0");

    let err = ConfigManager::new(dir.path_string()).await.err().unwrap();

    assert!(err.to_string().contains("request_timeout_seconds"));
}

#[test]
fn test_from_config_validates() {
    assert!(ConfigManager::from_config(NexlConfig::with_base_url("nexl:8181")).is_err());
    assert!(ConfigManager::from_config(TestConfigBuilder::new("http://nexl:8181").build()).is_ok());
}

#[tokio::test]
async fn test_unreadable_config_location_fails_loading() {
    // A file where the config directory should be makes the lookup itself fail
    let dir = TestConfigDir::empty();
    let not_a_dir = dir.config_dir.join("plain-file");
    std::fs::write(&not_a_dir, "x").unwrap();

    let err = ConfigManager::new(not_a_dir.display().to_string())
        .await
        .err()
        .unwrap();

    assert!(
        err.to_string().starts_with("Failed to load config from"),
        "error: {}",
        err
    );
}

#[tokio::test]
async fn test_config_path_that_is_a_directory_fails_loading() {
    let dir = TestConfigDir::empty();
    std::fs::create_dir(dir.config_dir.join("nexl.toml")).unwrap();

    let err = ConfigManager::new(dir.path_string()).await.err().unwrap();

    assert!(err.to_string().starts_with("Failed to load config from"));
}
