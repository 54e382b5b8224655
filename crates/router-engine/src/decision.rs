//! Routing input and output contracts.

use serde::{Deserialize, Serialize};

use router_core::{BackendDefinition, ComplianceDomain};
use router_classifier::RequestProfile;

/// Input contract for one routing call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// The request text to classify and route.
    pub query: String,

    /// Whether images are attached.
    #[serde(default)]
    pub has_images: bool,

    /// Whether audio is attached.
    #[serde(default)]
    pub has_audio: bool,

    /// Force a specific backend, bypassing all scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_backend_id: Option<String>,

    /// Maximum acceptable cost per request.
    ///
    /// Accepted for contract compatibility; not enforced by the baseline
    /// selection policy. See [`crate::router::ModelRouter::route`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cost_usd: Option<f64>,

    /// Required compliance domain.
    ///
    /// Accepted for contract compatibility; not enforced by the baseline
    /// selection policy. See [`crate::router::ModelRouter::route`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_domain: Option<ComplianceDomain>,
}

impl RouteRequest {
    /// Creates a routing request for plain text.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            has_images: false,
            has_audio: false,
            force_backend_id: None,
            max_cost_usd: None,
            compliance_domain: None,
        }
    }

    /// Sets whether images are attached.
    #[must_use]
    pub fn with_images(mut self, has_images: bool) -> Self {
        self.has_images = has_images;
        self
    }

    /// Sets whether audio is attached.
    #[must_use]
    pub fn with_audio(mut self, has_audio: bool) -> Self {
        self.has_audio = has_audio;
        self
    }

    /// Forces selection of a specific backend id.
    #[must_use]
    pub fn force_backend(mut self, id: impl Into<String>) -> Self {
        self.force_backend_id = Some(id.into());
        self
    }

    /// Sets the maximum acceptable cost per request.
    #[must_use]
    pub fn with_max_cost(mut self, max_cost_usd: f64) -> Self {
        self.max_cost_usd = Some(max_cost_usd);
        self
    }

    /// Sets the required compliance domain.
    #[must_use]
    pub fn with_compliance_domain(mut self, domain: ComplianceDomain) -> Self {
        self.compliance_domain = Some(domain);
        self
    }
}

/// The decision produced for one routing call.
///
/// Created once per call, ownership transferred to the caller, never
/// mutated after construction. The field set is the stable contract
/// surface for compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// The backend that should serve the request.
    pub selected: BackendDefinition,

    /// Ordered fallback backends, at most two.
    pub fallbacks: Vec<BackendDefinition>,

    /// Human-readable justification, semicolon-joined clauses.
    pub rationale: String,

    /// Estimated cost of serving the request, in USD.
    pub estimated_cost_usd: f64,

    /// The profile the classifier produced for the request.
    pub profile: RequestProfile,
}

impl RoutingDecision {
    /// Ids of the fallback backends, in order.
    #[must_use]
    pub fn fallback_ids(&self) -> Vec<&str> {
        self.fallbacks.iter().map(|b| b.id.as_str()).collect()
    }
}
