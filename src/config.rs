//! Configuration System
//!
//! Layered configuration for the generation pipeline: builder defaults, an
//! optional TOML file, then targeted environment overrides. The provider
//! credential always comes from configuration or the environment.

use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::logging::LoggingConfig;

pub use crate::client::ProviderConfig;

/// Environment variable carrying the provider-issued API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model identifier.
pub const MODEL_ENV: &str = "NAMESMITH_MODEL";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamesmithConfig {
    /// Completion endpoint settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NamesmithConfig {
    /// Load configuration from an optional TOML file plus the environment.
    ///
    /// Precedence (lowest to highest): struct defaults, the file when given,
    /// then GEMINI_API_KEY (only when the file set no key) and
    /// NAMESMITH_MODEL.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            let name = path.to_str().ok_or_else(|| {
                ConfigError::Invalid(format!("config path is not valid UTF-8: {}", path.display()))
            })?;
            builder = builder.add_source(File::with_name(name).required(false));
        }

        let mut loaded: NamesmithConfig = builder.build()?.try_deserialize()?;

        if loaded.provider.api_key.is_none() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                if !key.trim().is_empty() {
                    loaded.provider.api_key = Some(key);
                }
            }
        }

        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                loaded.provider.model = model;
            }
        }

        Ok(loaded)
    }

    /// Load configuration from the environment alone.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.provider.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
