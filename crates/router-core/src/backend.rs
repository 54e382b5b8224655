//! Backend definitions and capability metadata.
//!
//! A [`BackendDefinition`] is the catalog's unit of record: identity,
//! capability tags, pricing, latency profile, and compliance eligibility for
//! one callable generation or embedding provider. Entries are immutable;
//! updates replace the whole record by id.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Primary kind of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Text generation.
    Text,
    /// Image understanding only.
    Vision,
    /// Audio understanding.
    Audio,
    /// Combined text and image input.
    Multimodal,
    /// Embedding computation.
    Embedding,
}

impl BackendKind {
    /// Returns the lowercase wire name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Vision => "vision",
            Self::Audio => "audio",
            Self::Multimodal => "multimodal",
            Self::Embedding => "embedding",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete capability tags a backend can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Advanced multi-step reasoning.
    Reasoning,
    /// Code generation and debugging.
    Coding,
    /// Image input.
    Vision,
    /// Audio input.
    Audio,
    /// Tool / function calling.
    FunctionCalling,
    /// Incremental token streaming.
    Streaming,
    /// Schema-constrained structured output.
    StructuredOutput,
    /// Deterministic generation (seeded sampling).
    Deterministic,
}

/// Providers the catalog knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// OpenAI hosted models.
    #[serde(rename = "openai")]
    OpenAi,
    /// Anthropic hosted models.
    Anthropic,
    /// Azure-hosted OpenAI deployments.
    #[serde(rename = "azure_openai")]
    AzureOpenAi,
    /// Google hosted models.
    Google,
    /// Cohere hosted models.
    Cohere,
    /// Mistral hosted models.
    Mistral,
    /// Locally served models (zero marginal cost).
    Local,
}

impl Provider {
    /// Returns the lowercase wire name of this provider.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::AzureOpenAi => "azure_openai",
            Self::Google => "google",
            Self::Cohere => "cohere",
            Self::Mistral => "mistral",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compliance domains for regulated deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceDomain {
    /// Banking and financial services.
    Banking,
    /// Healthcare.
    Healthcare,
    /// Government.
    Government,
    /// No special regime.
    General,
}

/// Pricing for a backend, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct BackendPricing {
    /// Cost per 1,000 input tokens.
    #[validate(range(min = 0.0))]
    pub input_cost_per_1k_tokens: f64,

    /// Cost per 1,000 output tokens.
    #[validate(range(min = 0.0))]
    pub output_cost_per_1k_tokens: f64,

    /// Cost per image, for vision-capable backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub per_image_cost: Option<f64>,

    /// Cost per minute of audio input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub per_audio_minute_cost: Option<f64>,
}

impl BackendPricing {
    /// Creates pricing from per-1K input and output rates.
    #[must_use]
    pub fn new(input_cost_per_1k_tokens: f64, output_cost_per_1k_tokens: f64) -> Self {
        Self {
            input_cost_per_1k_tokens,
            output_cost_per_1k_tokens,
            per_image_cost: None,
            per_audio_minute_cost: None,
        }
    }

    /// Zero-cost pricing for locally served backends.
    #[must_use]
    pub fn free() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Sets the per-image cost.
    #[must_use]
    pub fn with_image_cost(mut self, cost: f64) -> Self {
        self.per_image_cost = Some(cost);
        self
    }

    /// Sets the per-audio-minute cost.
    #[must_use]
    pub fn with_audio_minute_cost(mut self, cost: f64) -> Self {
        self.per_audio_minute_cost = Some(cost);
        self
    }

    /// Combined input + output rate per 1K tokens.
    ///
    /// This is the sort key the routing engine orders candidates by.
    #[must_use]
    pub fn combined_per_1k(&self) -> f64 {
        self.input_cost_per_1k_tokens + self.output_cost_per_1k_tokens
    }
}

/// Expected latency characteristics, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyProfile {
    /// 50th percentile latency.
    pub p50_ms: u64,
    /// 95th percentile latency.
    pub p95_ms: u64,
    /// 99th percentile latency.
    pub p99_ms: u64,
    /// Time to first token for streaming backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_first_token_ms: Option<u64>,
}

impl LatencyProfile {
    /// Creates a latency profile from the three percentiles.
    #[must_use]
    pub fn new(p50_ms: u64, p95_ms: u64, p99_ms: u64) -> Self {
        Self {
            p50_ms,
            p95_ms,
            p99_ms,
            time_to_first_token_ms: None,
        }
    }

    /// Sets the time-to-first-token value.
    #[must_use]
    pub fn with_time_to_first_token(mut self, ttft_ms: u64) -> Self {
        self.time_to_first_token_ms = Some(ttft_ms);
        self
    }

    /// Whether the percentiles satisfy p50 <= p95 <= p99.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.p50_ms <= self.p95_ms && self.p95_ms <= self.p99_ms
    }
}

/// Complete definition of a backend in the catalog.
///
/// This is the source of truth for backend metadata. Field invariants
/// (non-negative costs, ordered latency percentiles, unique id) are the
/// registering caller's responsibility; the configuration loader enforces
/// them at the process boundary, the catalog itself does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BackendDefinition {
    /// Unique identifier used as the catalog key.
    #[validate(length(min = 1, max = 128))]
    pub id: String,

    /// Provider serving this backend.
    pub provider: Provider,

    /// Human-readable name.
    #[validate(length(min = 1, max = 256))]
    pub display_name: String,

    /// Official provider-side identifier (e.g. the upstream model name).
    #[validate(length(min = 1, max = 256))]
    pub upstream_name: String,

    /// Short description of the backend.
    #[serde(default)]
    pub description: String,

    /// Primary kind.
    pub kind: BackendKind,

    /// Capability tags.
    #[serde(default)]
    pub capabilities: Vec<Capability>,

    /// Maximum context window size in tokens.
    #[validate(range(min = 1))]
    pub max_context_tokens: u32,

    /// Pricing information.
    #[validate(nested)]
    pub pricing: BackendPricing,

    /// Expected latency characteristics.
    pub latency: LatencyProfile,

    /// Compliance domains this backend is approved for.
    #[serde(default = "default_compliance_domains")]
    pub compliance_domains: Vec<ComplianceDomain>,

    /// Data residency region, when pinned (e.g. "US", "EU").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_residency: Option<String>,

    /// Whether the backend participates in selection.
    #[serde(default = "default_true")]
    pub active: bool,

    /// Whether the backend is a recommended default for its kind.
    #[serde(default)]
    pub recommended: bool,
}

fn default_compliance_domains() -> Vec<ComplianceDomain> {
    vec![ComplianceDomain::General]
}

fn default_true() -> bool {
    true
}

impl BackendDefinition {
    /// Creates a definition with the required identity fields.
    ///
    /// Defaults: upstream name equals the id, empty capability set, free
    /// pricing, 4096-token context, general compliance, active, not
    /// recommended.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        provider: Provider,
        display_name: impl Into<String>,
        kind: BackendKind,
    ) -> Self {
        let id = id.into();
        Self {
            upstream_name: id.clone(),
            id,
            provider,
            display_name: display_name.into(),
            description: String::new(),
            kind,
            capabilities: Vec::new(),
            max_context_tokens: 4096,
            pricing: BackendPricing::free(),
            latency: LatencyProfile::new(0, 0, 0),
            compliance_domains: default_compliance_domains(),
            data_residency: None,
            active: true,
            recommended: false,
        }
    }

    /// Sets the official provider-side name.
    #[must_use]
    pub fn with_upstream_name(mut self, name: impl Into<String>) -> Self {
        self.upstream_name = name.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the capability tags.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Vec<Capability>) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Sets the maximum context window size.
    #[must_use]
    pub fn with_max_context_tokens(mut self, tokens: u32) -> Self {
        self.max_context_tokens = tokens;
        self
    }

    /// Sets the pricing.
    #[must_use]
    pub fn with_pricing(mut self, pricing: BackendPricing) -> Self {
        self.pricing = pricing;
        self
    }

    /// Sets the latency profile.
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the compliance domains.
    #[must_use]
    pub fn with_compliance_domains(mut self, domains: Vec<ComplianceDomain>) -> Self {
        self.compliance_domains = domains;
        self
    }

    /// Sets the data residency region.
    #[must_use]
    pub fn with_data_residency(mut self, region: impl Into<String>) -> Self {
        self.data_residency = Some(region.into());
        self
    }

    /// Marks this backend as a recommended default for its kind.
    #[must_use]
    pub fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    /// Excludes this backend from selection without deleting it.
    #[must_use]
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Whether this backend carries the given capability tag.
    #[must_use]
    pub fn supports_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Whether this backend is approved for the given compliance domain.
    #[must_use]
    pub fn is_compliant_for(&self, domain: ComplianceDomain) -> bool {
        self.compliance_domains.contains(&domain)
    }

    /// Total cost in USD for a request with the given token counts.
    #[must_use]
    pub fn calculate_cost(&self, input_tokens: u32, output_tokens: u32) -> f64 {
        let input_cost =
            (f64::from(input_tokens) / 1000.0) * self.pricing.input_cost_per_1k_tokens;
        let output_cost =
            (f64::from(output_tokens) / 1000.0) * self.pricing.output_cost_per_1k_tokens;
        input_cost + output_cost
    }
}
