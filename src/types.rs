//! Core domain types for the name generation pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of name suggestions the prompt asks the model for.
///
/// Replies with a different count are still returned to the caller; the
/// pipeline only logs the mismatch.
pub const EXPECTED_NAME_COUNT: usize = 10;

/// Tone preference for generated names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Descriptive,
    Funny,
    Trendy,
    Catchy,
    Professional,
}

impl Tone {
    /// All selectable tones, in the order the selection UI presents them.
    pub const ALL: [Tone; 5] = [
        Tone::Descriptive,
        Tone::Funny,
        Tone::Trendy,
        Tone::Catchy,
        Tone::Professional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Descriptive => "Descriptive",
            Tone::Funny => "Funny",
            Tone::Trendy => "Trendy",
            Tone::Catchy => "Catchy",
            Tone::Professional => "Professional",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name generation request as submitted by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-text description of the business or product.
    pub description: String,

    /// Optional keywords to work into the names. May be empty.
    #[serde(default)]
    pub keywords: String,

    /// Selected tone preferences, in selection order.
    #[serde(default)]
    pub tones: Vec<Tone>,
}

impl GenerationRequest {
    pub fn new(
        description: impl Into<String>,
        keywords: impl Into<String>,
        tones: Vec<Tone>,
    ) -> Self {
        Self {
            description: description.into(),
            keywords: keywords.into(),
            tones,
        }
    }
}

/// A single name suggestion parsed from the model reply.
///
/// All fields default to empty strings when absent. The model output is
/// rendered as-is and is not field-validated, so `category` stays free text
/// rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub explanation: String,

    #[serde(default)]
    pub category: String,
}

/// Framework category recognized for display styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCategory {
    Descriptive,
    PhraseBased,
    Humorous,
}

impl GeneratedName {
    /// Classify the category label against the three framework categories.
    ///
    /// Returns `None` for anything unrecognized; hosts fall back to their
    /// default styling in that case.
    pub fn category_kind(&self) -> Option<NameCategory> {
        match self.category.as_str() {
            "Descriptive" => Some(NameCategory::Descriptive),
            "Phrase-based" => Some(NameCategory::PhraseBased),
            "Humorous" => Some(NameCategory::Humorous),
            _ => None,
        }
    }
}
