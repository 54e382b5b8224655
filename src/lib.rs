//! # LLM Model Router
//!
//! Cost-aware model routing decision engine.
//!
//! Given an inbound request and a catalog of candidate backends, the engine
//! chooses which backend should serve the request and why: a primary
//! backend, up to two cost-ordered fallbacks, a cost estimate, and a
//! human-readable rationale. The decision is pure computation over static
//! catalog data; invoking the chosen backend is the caller's job.
//!
//! ## Quick start
//!
//! ```
//! use llm_model_router::{default_router, RouteRequest};
//!
//! let router = default_router();
//! let decision = router.route(&RouteRequest::new("hi")).unwrap();
//! assert_eq!(decision.estimated_cost_usd, 0.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

pub use router_catalog::{default_backends, BackendCatalog, BackendFilter};
pub use router_classifier::{
    KeywordPolicy, QueryClassifier, QueryComplexity, QueryIntent, QueryModality, RequestProfile,
};
pub use router_config::{CatalogSettings, ConfigError, Environment, RouterSettings};
pub use router_core::{
    BackendDefinition, BackendKind, BackendPricing, Capability, ComplianceDomain, LatencyProfile,
    Provider, RouterError, RouterResult,
};
pub use router_engine::{ModelRouter, RouteRequest, RoutingDecision};
pub use router_telemetry::{init_tracing, TelemetryError, TracingConfig};

/// Creates a router over a catalog seeded with the default backend list.
#[must_use]
pub fn default_router() -> ModelRouter {
    ModelRouter::new(Arc::new(BackendCatalog::with_defaults()))
}
