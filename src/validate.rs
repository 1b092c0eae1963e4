//! Request validation gate. Runs before any prompt or network work.

use crate::error::ValidationError;
use crate::types::{GenerationRequest, Tone};

/// A generation request that has passed validation.
///
/// Constructed only by [`validate`]. The inner request is carried unchanged:
/// the description keeps its surrounding whitespace and tones keep their
/// selection order.
#[derive(Debug, Clone)]
pub struct ValidatedRequest(GenerationRequest);

impl ValidatedRequest {
    pub fn description(&self) -> &str {
        &self.0.description
    }

    pub fn keywords(&self) -> &str {
        &self.0.keywords
    }

    pub fn tones(&self) -> &[Tone] {
        &self.0.tones
    }
}

/// Validate a generation request.
///
/// The description is checked first, so a request missing both fields
/// reports the missing description.
pub fn validate(request: GenerationRequest) -> Result<ValidatedRequest, ValidationError> {
    if request.description.trim().is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    if request.tones.is_empty() {
        return Err(ValidationError::MissingTone);
    }
    Ok(ValidatedRequest(request))
}
