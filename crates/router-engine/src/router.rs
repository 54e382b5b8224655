//! The model router.
//!
//! Routing is a pure synchronous computation: classify the request, filter
//! the catalog by modality and capability fit, order candidates by cost,
//! and apply the tier policy. No I/O, no suspension points, no retries;
//! timeout and retry policy belong to the invocation layer that consumes
//! the decision.

use std::sync::Arc;

use tracing::{debug, info};

use router_catalog::{BackendCatalog, BackendFilter};
use router_classifier::{
    QueryClassifier, QueryComplexity, QueryIntent, QueryModality, RequestProfile,
};
use router_core::{BackendDefinition, BackendKind, Capability, RouterError, RouterResult};

use crate::decision::{RouteRequest, RoutingDecision};

/// Rationale used when the caller forces a backend id.
const FORCED_SELECTION_RATIONALE: &str = "Backend explicitly specified";

/// Reasoning score above which a request is routed like a complex one.
const HIGH_REASONING_THRESHOLD: f64 = 0.8;

/// Maximum number of fallback backends in a decision.
const MAX_FALLBACKS: usize = 2;

/// Cost-aware model router.
///
/// Holds the catalog and classifier it routes with; construct one per
/// catalog and pass it by reference. Stateless per call: routing mutates
/// nothing.
#[derive(Debug)]
pub struct ModelRouter {
    catalog: Arc<BackendCatalog>,
    classifier: QueryClassifier,
}

impl ModelRouter {
    /// Creates a router over the given catalog with the default classifier.
    #[must_use]
    pub fn new(catalog: Arc<BackendCatalog>) -> Self {
        Self {
            catalog,
            classifier: QueryClassifier::new(),
        }
    }

    /// Creates a router with a custom classifier.
    #[must_use]
    pub fn with_classifier(catalog: Arc<BackendCatalog>, classifier: QueryClassifier) -> Self {
        Self { catalog, classifier }
    }

    /// The catalog this router selects from.
    #[must_use]
    pub fn catalog(&self) -> &Arc<BackendCatalog> {
        &self.catalog
    }

    /// Routes a request to the optimal backend.
    ///
    /// Returns the selected backend, up to two fallbacks in cost order, a
    /// cost estimate, and a rationale. Fails with
    /// [`RouterError::BackendNotFound`] when a forced id does not resolve
    /// and [`RouterError::NoEligibleBackends`] when no catalog entry
    /// satisfies the required kind and capabilities.
    ///
    /// `max_cost_usd` and `compliance_domain` are accepted and logged but
    /// not enforced by the baseline selection policy; enforcement is left
    /// to a future policy layer rather than guessed at here.
    pub fn route(&self, request: &RouteRequest) -> RouterResult<RoutingDecision> {
        // Forced selection bypasses all scoring. The classifier still runs
        // so the decision carries a profile for observability; the cost is
        // unknowable without a real invocation.
        if let Some(forced_id) = &request.force_backend_id {
            let selected = self.catalog.get(forced_id)?;
            let profile =
                self.classifier
                    .analyze(&request.query, request.has_images, request.has_audio);
            info!(backend_id = %selected.id, "backend forced by caller");
            return Ok(RoutingDecision {
                selected,
                fallbacks: Vec::new(),
                rationale: FORCED_SELECTION_RATIONALE.to_string(),
                estimated_cost_usd: 0.0,
                profile,
            });
        }

        let profile = self
            .classifier
            .analyze(&request.query, request.has_images, request.has_audio);

        info!(
            complexity = ?profile.complexity,
            modality = ?profile.modality,
            intent = ?profile.intent,
            reasoning_score = profile.reasoning_score,
            "routing query"
        );

        if let Some(max_cost) = request.max_cost_usd {
            debug!(max_cost_usd = max_cost, "max cost supplied; not enforced by baseline policy");
        }
        if let Some(domain) = request.compliance_domain {
            debug!(?domain, "compliance domain supplied; not enforced by baseline policy");
        }

        let kind = required_kind(&profile);
        let required = required_capabilities(&profile);
        let candidates = self.candidates(kind, &required)?;

        let index = selection_index(&profile, candidates.len());
        let selected = candidates[index].clone();
        debug!(backend_id = %selected.id, index, candidates = candidates.len(), "backend selected");

        let fallbacks: Vec<BackendDefinition> = candidates
            .iter()
            .filter(|c| c.id != selected.id)
            .take(MAX_FALLBACKS)
            .cloned()
            .collect();

        let output_tokens = estimate_output_tokens(&profile);
        let estimated_cost_usd =
            selected.calculate_cost(profile.estimated_input_tokens, output_tokens);
        let rationale = build_rationale(&selected, &profile);

        info!(
            selected = %selected.id,
            fallbacks = fallbacks.len(),
            estimated_cost_usd,
            "routing decision made"
        );

        Ok(RoutingDecision {
            selected,
            fallbacks,
            rationale,
            estimated_cost_usd,
            profile,
        })
    }

    /// Active backends of the kind whose capability set covers the
    /// required set, sorted ascending by combined per-1K cost.
    ///
    /// The sort is stable, so equally priced backends keep registration
    /// order, the deterministic tie-break.
    fn candidates(
        &self,
        kind: BackendKind,
        required: &[Capability],
    ) -> RouterResult<Vec<BackendDefinition>> {
        let mut candidates: Vec<BackendDefinition> = self
            .catalog
            .list(&BackendFilter::new().with_kind(kind))
            .into_iter()
            .filter(|def| required.iter().all(|cap| def.supports_capability(*cap)))
            .collect();

        if candidates.is_empty() {
            return Err(RouterError::no_eligible_backends(kind, required.to_vec()));
        }

        candidates.sort_by(|a, b| {
            a.pricing
                .combined_per_1k()
                .total_cmp(&b.pricing.combined_per_1k())
        });

        Ok(candidates)
    }
}

/// Maps request modality to the catalog kind that can serve it.
///
/// Image input needs a multimodal backend; pure-vision backends without a
/// text pathway cannot answer a text prompt about an image.
fn required_kind(profile: &RequestProfile) -> BackendKind {
    match profile.modality {
        QueryModality::Image | QueryModality::Multimodal => BackendKind::Multimodal,
        QueryModality::Audio => BackendKind::Audio,
        QueryModality::Text => BackendKind::Text,
    }
}

/// Capability tags a backend must carry to serve the profiled request.
fn required_capabilities(profile: &RequestProfile) -> Vec<Capability> {
    let mut required = Vec::new();

    if profile.requires_coding {
        required.push(Capability::Coding);
    }
    if profile.requires_reasoning {
        required.push(Capability::Reasoning);
    }
    if profile.modality == QueryModality::Image {
        required.push(Capability::Vision);
    }
    if profile.modality == QueryModality::Audio {
        required.push(Capability::Audio);
    }

    required
}

/// Index into the cost-ordered candidate list for the tier policy.
///
/// Simple takes the cheapest; complex (or a reasoning score above the
/// threshold) takes the most expensive, using cost as a capability proxy
/// rather than a true quality signal; moderate takes the middle, falling
/// back to the cheapest when there are fewer than two candidates.
fn selection_index(profile: &RequestProfile, candidate_count: usize) -> usize {
    match profile.complexity {
        QueryComplexity::Simple => 0,
        QueryComplexity::Complex => candidate_count - 1,
        QueryComplexity::Moderate => {
            if profile.reasoning_score > HIGH_REASONING_THRESHOLD {
                candidate_count - 1
            } else {
                candidate_count / 2
            }
        }
    }
}

/// Fixed output-size table for cost projection. Intent is checked before
/// complexity; first matching rule wins.
fn estimate_output_tokens(profile: &RequestProfile) -> u32 {
    match profile.intent {
        QueryIntent::Conversational => 50,
        QueryIntent::Creative => 500,
        QueryIntent::Technical => 300,
        _ => {
            if profile.complexity == QueryComplexity::Complex {
                400
            } else {
                150
            }
        }
    }
}

/// Assembles the semicolon-joined rationale.
///
/// Clause order is fixed: complexity clause first, optional coding /
/// reasoning-score / modality clauses in that order, per-1K cost clause
/// last.
fn build_rationale(selected: &BackendDefinition, profile: &RequestProfile) -> String {
    let mut clauses = Vec::new();

    clauses.push(match profile.complexity {
        QueryComplexity::Simple => format!(
            "Query is simple, using cost-effective backend ({})",
            selected.display_name
        ),
        QueryComplexity::Complex => format!(
            "Query is complex, using advanced backend ({})",
            selected.display_name
        ),
        QueryComplexity::Moderate => format!(
            "Query has moderate complexity, using balanced backend ({})",
            selected.display_name
        ),
    });

    if profile.requires_coding {
        clauses.push("Selected for coding capability".to_string());
    }
    if profile.requires_reasoning {
        clauses.push(format!("High reasoning score ({:.2})", profile.reasoning_score));
    }
    if profile.modality != QueryModality::Text {
        clauses.push(format!("Supports {} input", profile.modality));
    }

    clauses.push(format!(
        "Est. cost: ${:.4} per 1K tokens",
        selected.pricing.combined_per_1k()
    ));

    clauses.join("; ")
}
