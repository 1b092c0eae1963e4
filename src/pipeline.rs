//! Pipeline orchestration: validate the request, build the prompt, call the
//! completion endpoint once, extract name records from the reply.

use tracing::{debug, info, instrument, warn};

use crate::client::{CompletionClient, GeminiClient};
use crate::config::NamesmithConfig;
use crate::error::{ConfigError, GenerateError};
use crate::extract::extract_names;
use crate::prompt::build_prompt;
use crate::types::{GeneratedName, GenerationRequest, EXPECTED_NAME_COUNT};
use crate::validate::validate;

/// Name generation pipeline facade.
///
/// Holds no per-request state: `generate` borrows `&self`, so concurrent
/// invocations run independently and complete in any order.
pub struct NameGenerator {
    client: Box<dyn CompletionClient>,
}

impl std::fmt::Debug for NameGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameGenerator").finish_non_exhaustive()
    }
}

impl NameGenerator {
    /// Wire the pipeline to a Gemini client built from configuration.
    pub fn new(config: &NamesmithConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: Box::new(GeminiClient::new(&config.provider)?),
        })
    }

    /// Wire the pipeline to an arbitrary completion client.
    pub fn with_client(client: Box<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Run one generation request through the pipeline.
    ///
    /// Validation failures return before any network activity. The record
    /// count is not enforced: a reply with other than the requested count is
    /// logged and returned as-is.
    #[instrument(skip(self, request), fields(tone_count = request.tones.len()))]
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<Vec<GeneratedName>, GenerateError> {
        let validated = validate(request)?;

        let prompt = build_prompt(&validated);
        debug!(prompt_len = prompt.len(), "Built generation prompt");

        let reply = self.client.complete(&prompt).await?;
        debug!(reply_len = reply.len(), "Received completion text");

        let names = extract_names(&reply)?;
        if names.len() != EXPECTED_NAME_COUNT {
            warn!(
                count = names.len(),
                expected = EXPECTED_NAME_COUNT,
                "Completion returned unexpected name count"
            );
        }

        info!(count = names.len(), "Generated business names");
        Ok(names)
    }
}
