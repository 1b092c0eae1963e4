//! Error types for the name generation pipeline.

use thiserror::Error;

/// Request validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Business description is required")]
    MissingDescription,

    #[error("At least one tone preference is required")]
    MissingTone,
}

/// Transport-level errors from the completion endpoint
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Completion endpoint returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Completion endpoint unreachable: {0}")]
    NetworkUnavailable(String),

    #[error("Completion reply envelope has no candidate text")]
    MalformedEnvelope,
}

/// Errors turning completion text into name records
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No JSON object found in completion text")]
    NoJsonFound,

    #[error("Invalid JSON in completion text: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Configuration and client construction errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not configured: set GEMINI_API_KEY or provider.api_key")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

/// Umbrella error returned by the generation pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Completion request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Completion reply unusable: {0}")]
    Parse(#[from] ParseError),
}

impl GenerateError {
    /// Message suitable for direct display to an end user.
    ///
    /// Validation failures map to actionable prompts. Transport and parse
    /// failures all collapse to one generic message; the detailed cause stays
    /// in `Display` output and logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerateError::Validation(ValidationError::MissingDescription) => {
                "Please provide a business description to generate names."
            }
            GenerateError::Validation(ValidationError::MissingTone) => {
                "Please select at least one tone preference."
            }
            GenerateError::Transport(_) | GenerateError::Parse(_) => {
                "Failed to generate names. Please try again."
            }
        }
    }
}
