/*!
 * Tests for application configuration loading and validation
 */

use scormtran::app_config::{Config, LogLevel};

use crate::common::create_temp_dir;

/// Test that the default configuration passes validation
#[test]
fn test_defaultConfig_shouldBeValid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.target_language, "es");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that an empty JSON object deserializes into full defaults
#[test]
fn test_deserialize_withEmptyObject_shouldFillDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.target_language, "es");
    assert!(config.provider.endpoint.starts_with("https://"));
    assert_eq!(config.provider.timeout_secs, 30);
}

/// Test partial configuration files
#[test]
fn test_deserialize_withPartialConfig_shouldKeepOtherDefaults() {
    let json = r#"{ "target_language": "fr", "provider": { "endpoint": "http://localhost:5000/translate" } }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.target_language, "fr");
    assert_eq!(config.provider.endpoint, "http://localhost:5000/translate");
    assert_eq!(config.provider.retry_count, 3);
}

/// Test validation of an empty target language
#[test]
fn test_validate_withEmptyTargetLanguage_shouldFail() {
    let mut config = Config::default();
    config.target_language = "  ".to_string();
    assert!(config.validate().is_err());
}

/// Test validation of a non-http endpoint
#[test]
fn test_validate_withBadEndpoint_shouldFail() {
    let mut config = Config::default();
    config.provider.endpoint = "localhost:5000".to_string();
    assert!(config.validate().is_err());
}

/// Test validation of a zero timeout
#[test]
fn test_validate_withZeroTimeout_shouldFail() {
    let mut config = Config::default();
    config.provider.timeout_secs = 0;
    assert!(config.validate().is_err());
}

/// Test save/load round trip through a file
#[test]
fn test_saveAndLoad_shouldRoundTrip() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.target_language = "de".to_string();
    config.provider.rate_limit_delay_ms = 250;
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.target_language, "de");
    assert_eq!(loaded.provider.rate_limit_delay_ms, 250);
}

/// Test that loading a config with a broken endpoint fails validation
#[test]
fn test_fromFile_withInvalidConfig_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "provider": { "endpoint": "not a url" } }"#).unwrap();

    assert!(Config::from_file(&path).is_err());
}
