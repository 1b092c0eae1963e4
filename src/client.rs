//! Completion endpoint client.
//!
//! One production implementation talks to the Gemini `generateContent` API.
//! The [`CompletionClient`] trait is the seam the pipeline is built against,
//! so tests can substitute stubs without touching the network.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ConfigError, TransportError};

/// Fallback when an error payload carries no usable message.
const FALLBACK_ERROR_MESSAGE: &str = "Failed to generate names";

const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Completion endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider-issued API key. Required to construct a client; supplied via
    /// configuration or the GEMINI_API_KEY environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier inserted into the request path.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the completion service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Total request timeout in seconds. The connect timeout is fixed at 10s.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model cannot be empty".to_string()));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Completion client trait
///
/// Exactly one request per `complete` call; no retry. The only production
/// implementation is [`GeminiClient`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one prompt and return the model's reply text.
    async fn complete(&self, prompt: &str) -> Result<String, TransportError>;
}

// Gemini generateContent request/response structures
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// Helper function to pull the provider's message out of an error payload
fn error_payload_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

// Walk candidates[0].content.parts[0].text. Anything missing along that
// path, including an unparseable success body, is a malformed envelope.
fn first_candidate_text(body: &str) -> Result<String, TransportError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|_| TransportError::MalformedEnvelope)?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or(TransportError::MalformedEnvelope)
}

// Helper function to map reqwest send errors to TransportError.
// Request URLs carry the credential in the query string; the detail is
// formatted without the URL.
fn map_send_error(error: reqwest::Error) -> TransportError {
    let error = error.without_url();
    if error.is_timeout() {
        TransportError::NetworkUnavailable(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        TransportError::NetworkUnavailable(format!("Connection error: {}", error))
    } else {
        TransportError::NetworkUnavailable(format!("HTTP error: {}", error))
    }
}

fn build_http_client(request_timeout: Duration) -> Result<Client, ConfigError> {
    Client::builder()
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .timeout(request_timeout)
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))
}

/// Gemini completion client
pub struct GeminiClient {
    client: Client,
    model: String,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from provider configuration.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] when no credential is
    /// configured, before any request is made.
    pub fn new(config: &ProviderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?
            .to_string();
        let client = build_http_client(config.timeout())?;

        Ok(Self {
            client,
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            api_key,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, TransportError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.request_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_send_error)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_payload_message(&body),
            });
        }

        first_candidate_text(&body)
    }
}
