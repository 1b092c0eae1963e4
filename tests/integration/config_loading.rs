//! Integration tests for configuration loading and pipeline wiring.

use namesmith::config::{NamesmithConfig, API_KEY_ENV, MODEL_ENV};
use namesmith::error::ConfigError;
use namesmith::pipeline::NameGenerator;
use std::sync::Mutex;
use tempfile::TempDir;

// Mutex for tests that manipulate provider environment variables
static PROVIDER_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with the provider environment set as given, restoring it after.
fn with_provider_env<F, R>(api_key: Option<&str>, model: Option<&str>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = PROVIDER_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original_key = std::env::var(API_KEY_ENV).ok();
    let original_model = std::env::var(MODEL_ENV).ok();

    match api_key {
        Some(key) => std::env::set_var(API_KEY_ENV, key),
        None => std::env::remove_var(API_KEY_ENV),
    }
    match model {
        Some(model) => std::env::set_var(MODEL_ENV, model),
        None => std::env::remove_var(MODEL_ENV),
    }

    let result = f();

    match original_key {
        Some(key) => std::env::set_var(API_KEY_ENV, key),
        None => std::env::remove_var(API_KEY_ENV),
    }
    match original_model {
        Some(model) => std::env::set_var(MODEL_ENV, model),
        None => std::env::remove_var(MODEL_ENV),
    }

    result
}

#[test]
fn test_load_full_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("namesmith.toml");

    std::fs::write(
        &config_file,
        r#"
[provider]
api_key = "file-key"
model = "gemini-1.5-pro"
endpoint = "https://generativelanguage.googleapis.com"
timeout_secs = 30

[logging]
level = "debug"
format = "json"
color = false
"#,
    )
    .unwrap();

    with_provider_env(None, None, || {
        let config = NamesmithConfig::load(Some(&config_file)).unwrap();
        assert!(config.validate().is_ok());

        assert_eq!(config.provider.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.provider.model, "gemini-1.5-pro");
        assert_eq!(config.provider.timeout_secs, 30);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!(!config.logging.color);
    });
}

#[test]
fn test_env_key_fills_in_when_file_has_none() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("namesmith.toml");
    std::fs::write(&config_file, "[provider]\nmodel = \"gemini-1.5-pro\"\n").unwrap();

    with_provider_env(Some("env-key"), None, || {
        let config = NamesmithConfig::load(Some(&config_file)).unwrap();
        assert_eq!(config.provider.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.provider.model, "gemini-1.5-pro");
    });
}

#[test]
fn test_model_env_overrides_file_value() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("namesmith.toml");
    std::fs::write(
        &config_file,
        "[provider]\napi_key = \"file-key\"\nmodel = \"gemini-1.5-flash\"\n",
    )
    .unwrap();

    with_provider_env(None, Some("gemini-1.5-pro"), || {
        let config = NamesmithConfig::load(Some(&config_file)).unwrap();
        assert_eq!(config.provider.model, "gemini-1.5-pro");
        assert_eq!(config.provider.api_key.as_deref(), Some("file-key"));
    });
}

#[test]
fn test_generator_construction_requires_api_key() {
    let config = NamesmithConfig::default();
    assert!(config.provider.api_key.is_none());

    let err = NameGenerator::new(&config).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey));
}

#[test]
fn test_generator_construction_rejects_blank_api_key() {
    let mut config = NamesmithConfig::default();
    config.provider.api_key = Some("   ".to_string());

    let err = NameGenerator::new(&config).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey));
}

#[test]
fn test_generator_builds_from_loaded_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("namesmith.toml");
    std::fs::write(&config_file, "[provider]\napi_key = \"file-key\"\n").unwrap();

    with_provider_env(None, None, || {
        let config = NamesmithConfig::load(Some(&config_file)).unwrap();
        assert!(NameGenerator::new(&config).is_ok());
    });
}
