//! Lenient extraction of name records from completion text.
//!
//! Model replies usually wrap the JSON payload in prose or code fences. The
//! extractor takes the greedy span from the first `{` to the last `}` and
//! parses only that span. It is a single scan, not a streaming tokenizer, so
//! stray braces in surrounding prose widen the span and surface as invalid
//! JSON rather than being skipped.

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::GeneratedName;

#[derive(Debug, Default, Deserialize)]
struct NamesEnvelope {
    #[serde(default)]
    names: Vec<GeneratedName>,
}

/// Extract name records from raw completion text.
///
/// A parsed object without a top-level `names` key yields an empty list, not
/// an error. Records are not checked for count, emptiness, or category
/// vocabulary.
pub fn extract_names(raw: &str) -> Result<Vec<GeneratedName>, ParseError> {
    let start = raw.find('{').ok_or(ParseError::NoJsonFound)?;
    let end = raw.rfind('}').ok_or(ParseError::NoJsonFound)?;
    if end < start {
        return Err(ParseError::NoJsonFound);
    }

    let envelope: NamesEnvelope = serde_json::from_str(&raw[start..=end])?;
    Ok(envelope.names)
}
