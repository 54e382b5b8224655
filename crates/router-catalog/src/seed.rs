//! Default backend seed list.
//!
//! Mirrors a typical multi-provider deployment: premium and budget hosted
//! text backends, a multimodal vision backend, embedding backends, and
//! zero-cost local backends for simple traffic. Deployments replace or
//! extend this list through configuration.

use router_core::{
    BackendDefinition, BackendKind, BackendPricing, Capability, LatencyProfile, Provider,
};

/// Returns the default backend definitions, in registration order.
///
/// Registration order matters: it is the deterministic tie-break order for
/// listing and for recommended-entry lookups.
#[must_use]
pub fn default_backends() -> Vec<BackendDefinition> {
    vec![
        // ==========================================
        // OPENAI BACKENDS
        // ==========================================
        BackendDefinition::new("gpt-4-turbo", Provider::OpenAi, "GPT-4 Turbo", BackendKind::Text)
            .with_upstream_name("gpt-4-turbo-preview")
            .with_description("Most capable GPT-4 tier with 128k context")
            .with_capabilities(vec![
                Capability::Reasoning,
                Capability::Coding,
                Capability::FunctionCalling,
                Capability::Streaming,
                Capability::StructuredOutput,
            ])
            .with_max_context_tokens(128_000)
            .with_pricing(BackendPricing::new(0.01, 0.03))
            .with_latency(LatencyProfile::new(2000, 5000, 8000).with_time_to_first_token(500))
            .recommended(),
        BackendDefinition::new(
            "gpt-4-vision",
            Provider::OpenAi,
            "GPT-4 Vision",
            BackendKind::Multimodal,
        )
        .with_upstream_name("gpt-4-vision-preview")
        .with_description("GPT-4 tier with vision input")
        .with_capabilities(vec![
            Capability::Reasoning,
            Capability::Vision,
            Capability::FunctionCalling,
            Capability::Streaming,
        ])
        .with_max_context_tokens(128_000)
        .with_pricing(BackendPricing::new(0.01, 0.03).with_image_cost(0.01))
        .with_latency(LatencyProfile::new(3000, 7000, 10_000).with_time_to_first_token(800))
        .recommended(),
        BackendDefinition::new(
            "gpt-3.5-turbo",
            Provider::OpenAi,
            "GPT-3.5 Turbo",
            BackendKind::Text,
        )
        .with_description("Fast and cost-effective hosted tier")
        .with_capabilities(vec![
            Capability::FunctionCalling,
            Capability::Streaming,
            Capability::StructuredOutput,
        ])
        .with_max_context_tokens(16_385)
        .with_pricing(BackendPricing::new(0.0005, 0.0015))
        .with_latency(LatencyProfile::new(800, 2000, 3000).with_time_to_first_token(200)),
        // ==========================================
        // ANTHROPIC BACKENDS
        // ==========================================
        BackendDefinition::new(
            "claude-sonnet-4",
            Provider::Anthropic,
            "Claude Sonnet 4",
            BackendKind::Text,
        )
        .with_upstream_name("claude-sonnet-4-20250514")
        .with_description("Balanced hosted tier")
        .with_capabilities(vec![
            Capability::Reasoning,
            Capability::Coding,
            Capability::FunctionCalling,
            Capability::Streaming,
        ])
        .with_max_context_tokens(200_000)
        .with_pricing(BackendPricing::new(0.003, 0.015))
        .with_latency(LatencyProfile::new(1500, 4000, 6000).with_time_to_first_token(400)),
        BackendDefinition::new(
            "claude-opus-4",
            Provider::Anthropic,
            "Claude Opus 4",
            BackendKind::Text,
        )
        .with_upstream_name("claude-opus-4-20250514")
        .with_description("Most capable hosted tier")
        .with_capabilities(vec![
            Capability::Reasoning,
            Capability::Coding,
            Capability::FunctionCalling,
            Capability::Streaming,
        ])
        .with_max_context_tokens(200_000)
        .with_pricing(BackendPricing::new(0.015, 0.075))
        .with_latency(LatencyProfile::new(2500, 6000, 9000).with_time_to_first_token(600)),
        // ==========================================
        // EMBEDDING BACKENDS
        // ==========================================
        BackendDefinition::new(
            "text-embedding-3-small",
            Provider::OpenAi,
            "Embedding Small",
            BackendKind::Embedding,
        )
        .with_description("Fast and cost-effective embeddings")
        .with_max_context_tokens(8191)
        .with_pricing(BackendPricing::new(0.000_02, 0.0))
        .with_latency(LatencyProfile::new(100, 300, 500))
        .recommended(),
        BackendDefinition::new(
            "text-embedding-3-large",
            Provider::OpenAi,
            "Embedding Large",
            BackendKind::Embedding,
        )
        .with_description("Higher-quality embeddings for better retrieval")
        .with_max_context_tokens(8191)
        .with_pricing(BackendPricing::new(0.000_13, 0.0))
        .with_latency(LatencyProfile::new(150, 400, 600)),
        // ==========================================
        // LOCAL BACKENDS (zero marginal cost)
        // ==========================================
        BackendDefinition::new(
            "local-llama-8b",
            Provider::Local,
            "Llama 3.1 8B (local)",
            BackendKind::Text,
        )
        .with_upstream_name("ollama/llama3.1:8b")
        .with_description("Fast local backend, zero API cost")
        .with_capabilities(vec![Capability::Streaming])
        .with_max_context_tokens(8192)
        .with_pricing(BackendPricing::free())
        .with_latency(LatencyProfile::new(500, 1500, 3000).with_time_to_first_token(200)),
        BackendDefinition::new(
            "local-mistral-7b",
            Provider::Local,
            "Mistral 7B (local)",
            BackendKind::Text,
        )
        .with_upstream_name("ollama/mistral:7b")
        .with_description("Balanced local backend with usable reasoning")
        .with_capabilities(vec![Capability::Reasoning, Capability::Streaming])
        .with_max_context_tokens(8192)
        .with_pricing(BackendPricing::free())
        .with_latency(LatencyProfile::new(600, 1800, 3500).with_time_to_first_token(250)),
        BackendDefinition::new(
            "local-phi3-mini",
            Provider::Local,
            "Phi-3 Mini (local)",
            BackendKind::Text,
        )
        .with_upstream_name("ollama/phi3:mini")
        .with_description("Ultra-fast local backend for simple traffic")
        .with_capabilities(vec![Capability::Streaming])
        .with_pricing(BackendPricing::free())
        .with_latency(LatencyProfile::new(300, 800, 1500).with_time_to_first_token(100)),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let defs = default_backends();
        let ids: HashSet<_> = defs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), defs.len());
    }

    #[test]
    fn test_seed_invariants_hold() {
        for def in default_backends() {
            assert!(def.pricing.input_cost_per_1k_tokens >= 0.0, "{}", def.id);
            assert!(def.pricing.output_cost_per_1k_tokens >= 0.0, "{}", def.id);
            assert!(def.latency.is_ordered(), "{}", def.id);
            assert!(def.max_context_tokens > 0, "{}", def.id);
        }
    }

    #[test]
    fn test_seed_covers_core_kinds() {
        let defs = default_backends();
        for kind in [BackendKind::Text, BackendKind::Multimodal, BackendKind::Embedding] {
            assert!(defs.iter().any(|d| d.kind == kind), "missing kind {kind}");
        }
    }
}
