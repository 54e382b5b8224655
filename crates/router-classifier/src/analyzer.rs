//! The heuristic query classifier.
//!
//! Classification is cheap on purpose: routing a request through a model to
//! decide which model to use would defeat the point. The heuristics here are
//! fixed-precedence keyword and length checks with no randomness, no time
//! dependence, and no hidden state.

use tracing::debug;

use crate::keywords;
use crate::profile::{QueryComplexity, QueryIntent, QueryModality, RequestProfile};

/// Token estimate divisor: roughly one token per four characters.
///
/// A deliberate approximation; not locale- or tokenizer-accurate.
const CHARS_PER_TOKEN: usize = 4;

/// The keyword tables the classifier consults.
///
/// Grouped so a deployment can swap in extended tables without touching the
/// classification control flow. Defaults to the versioned tables in
/// [`crate::keywords`].
#[derive(Debug, Clone, Copy)]
pub struct KeywordPolicy {
    /// Simple / conversational phrases.
    pub simple: &'static [&'static str],
    /// Analytically complex phrases.
    pub complex: &'static [&'static str],
    /// Coding and engineering phrases.
    pub technical: &'static [&'static str],
    /// Creative generation phrases.
    pub creative: &'static [&'static str],
    /// Reasoning requirement patterns.
    pub reasoning_patterns: &'static [&'static str],
    /// Whole-word reasoning connectives.
    pub connectives: &'static [&'static str],
    /// Advanced reasoning keywords.
    pub advanced_reasoning: &'static [&'static str],
    /// Multi-step indicator words.
    pub step_indicators: &'static [&'static str],
    /// Question prefixes.
    pub question_prefixes: &'static [&'static str],
}

impl Default for KeywordPolicy {
    fn default() -> Self {
        Self {
            simple: keywords::SIMPLE_KEYWORDS,
            complex: keywords::COMPLEX_KEYWORDS,
            technical: keywords::TECHNICAL_KEYWORDS,
            creative: keywords::CREATIVE_KEYWORDS,
            reasoning_patterns: keywords::REASONING_PATTERNS,
            connectives: keywords::REASONING_CONNECTIVES,
            advanced_reasoning: keywords::ADVANCED_REASONING_KEYWORDS,
            step_indicators: keywords::STEP_INDICATORS,
            question_prefixes: keywords::QUESTION_PREFIXES,
        }
    }
}

/// Pure heuristic classifier from request text to [`RequestProfile`].
#[derive(Debug, Clone, Default)]
pub struct QueryClassifier {
    policy: KeywordPolicy,
}

impl QueryClassifier {
    /// Creates a classifier with the default keyword policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier with a custom keyword policy.
    #[must_use]
    pub fn with_policy(policy: KeywordPolicy) -> Self {
        Self { policy }
    }

    /// Classifies a request into a routing profile.
    ///
    /// Deterministic: identical `(query, has_images, has_audio)` input
    /// always yields an identical profile.
    #[must_use]
    pub fn analyze(&self, query: &str, has_images: bool, has_audio: bool) -> RequestProfile {
        let lower = query.to_lowercase();

        let modality = modality_of(has_images, has_audio);
        let intent = self.intent_of(&lower);
        let estimated_input_tokens = (query.chars().count() / CHARS_PER_TOKEN) as u32;
        let complexity = self.complexity_of(&lower, estimated_input_tokens);

        let requires_coding = contains_any(&lower, self.policy.technical);
        let requires_creativity = contains_any(&lower, self.policy.creative);
        let requires_reasoning = complexity == QueryComplexity::Complex
            || contains_any(&lower, self.policy.reasoning_patterns);

        let reasoning_score = self.reasoning_score(&lower, complexity, requires_reasoning);

        let profile = RequestProfile {
            complexity,
            modality,
            intent,
            estimated_input_tokens,
            requires_reasoning,
            requires_creativity,
            requires_coding,
            reasoning_score,
        };

        debug!(
            complexity = ?profile.complexity,
            modality = ?profile.modality,
            intent = ?profile.intent,
            reasoning_score = profile.reasoning_score,
            "query analyzed"
        );

        profile
    }

    /// Intent, first match wins: technical, creative, analytical,
    /// conversational, question prefix, then informational.
    fn intent_of(&self, lower: &str) -> QueryIntent {
        if contains_any(lower, self.policy.technical) {
            return QueryIntent::Technical;
        }
        if contains_any(lower, self.policy.creative) {
            return QueryIntent::Creative;
        }
        if contains_any(lower, self.policy.complex) {
            return QueryIntent::Analytical;
        }
        if contains_any(lower, self.policy.simple) {
            return QueryIntent::Conversational;
        }
        if self
            .policy
            .question_prefixes
            .iter()
            .any(|prefix| lower.starts_with(prefix))
        {
            return QueryIntent::Informational;
        }
        QueryIntent::Informational
    }

    fn complexity_of(&self, lower: &str, estimated_tokens: u32) -> QueryComplexity {
        // Very short requests are simple regardless of wording
        if estimated_tokens < 10 {
            return QueryComplexity::Simple;
        }
        if contains_any(lower, self.policy.simple) {
            return QueryComplexity::Simple;
        }
        if contains_any(lower, self.policy.complex) {
            return QueryComplexity::Complex;
        }
        // Long requests tend toward complex
        if estimated_tokens > 100 {
            return QueryComplexity::Complex;
        }
        // Multi-part questions
        if lower.matches('?').count() > 1 {
            return QueryComplexity::Moderate;
        }
        if contains_any_word(lower, self.policy.connectives) {
            return QueryComplexity::Moderate;
        }
        QueryComplexity::Moderate
    }

    fn reasoning_score(
        &self,
        lower: &str,
        complexity: QueryComplexity,
        requires_reasoning: bool,
    ) -> f64 {
        let mut score: f64 = match complexity {
            QueryComplexity::Simple => 0.2,
            QueryComplexity::Moderate => 0.5,
            QueryComplexity::Complex => 0.8,
        };

        if requires_reasoning {
            score += 0.15;
        }
        if contains_any(lower, self.policy.advanced_reasoning) {
            score += 0.15;
        }

        // Two or more distinct step indicators mark multi-step requests
        let step_hits = self
            .policy
            .step_indicators
            .iter()
            .filter(|kw| lower.contains(*kw))
            .count();
        if step_hits >= 2 {
            score += 0.10;
        }

        score.min(1.0)
    }
}

fn modality_of(has_images: bool, has_audio: bool) -> QueryModality {
    match (has_images, has_audio) {
        (true, true) => QueryModality::Multimodal,
        (true, false) => QueryModality::Image,
        (false, true) => QueryModality::Audio,
        (false, false) => QueryModality::Text,
    }
}

fn contains_any(text: &str, table: &[&str]) -> bool {
    table.iter().any(|kw| text.contains(kw))
}

/// Whole-word membership via space padding, so "but" does not match "butter".
fn contains_any_word(text: &str, table: &[&str]) -> bool {
    let padded = format!(" {text} ");
    table.iter().any(|kw| padded.contains(&format!(" {kw} ")))
}
