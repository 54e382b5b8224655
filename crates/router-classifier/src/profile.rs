//! Classifier output types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Complexity tiers for inbound requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryComplexity {
    /// Greetings, FAQ, basic lookups.
    Simple,
    /// Standard reasoning, multi-part questions.
    Moderate,
    /// Advanced reasoning, coding, research.
    Complex,
}

/// Input modality of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryModality {
    /// Text only.
    Text,
    /// Text with attached images.
    Image,
    /// Text with attached audio.
    Audio,
    /// Text with both images and audio.
    Multimodal,
}

impl QueryModality {
    /// Returns the lowercase name of this modality.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Multimodal => "multimodal",
        }
    }
}

impl fmt::Display for QueryModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// High-level intent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    /// Questions and lookups.
    Informational,
    /// Chat and greetings.
    Conversational,
    /// Analysis and reasoning.
    Analytical,
    /// Writing and brainstorming.
    Creative,
    /// Coding and debugging.
    Technical,
    /// Actions and commands.
    Transactional,
}

/// Structured profile of one inbound request.
///
/// Created fresh per request, immutable, never shared across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestProfile {
    /// Complexity tier.
    pub complexity: QueryComplexity,
    /// Input modality.
    pub modality: QueryModality,
    /// High-level intent.
    pub intent: QueryIntent,
    /// Estimated input token count (chars / 4 approximation).
    pub estimated_input_tokens: u32,
    /// Whether the request needs advanced reasoning.
    pub requires_reasoning: bool,
    /// Whether the request needs creative generation.
    pub requires_creativity: bool,
    /// Whether the request involves code.
    pub requires_coding: bool,
    /// Reasoning requirement score in [0, 1].
    pub reasoning_score: f64,
}
