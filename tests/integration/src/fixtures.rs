//! Shared catalog fixtures for integration tests.

use std::sync::Arc;

use router_catalog::BackendCatalog;
use router_core::{
    BackendDefinition, BackendKind, BackendPricing, Capability, LatencyProfile, Provider,
};
use router_engine::ModelRouter;

/// A text backend with the given combined per-1K cost, split evenly across
/// input and output rates.
pub fn text_backend(id: &str, combined_cost: f64, capabilities: &[Capability]) -> BackendDefinition {
    BackendDefinition::new(id, Provider::Local, id.to_uppercase(), BackendKind::Text)
        .with_capabilities(capabilities.to_vec())
        .with_pricing(BackendPricing::new(combined_cost / 2.0, combined_cost / 2.0))
        .with_latency(LatencyProfile::new(200, 600, 1200))
}

/// A catalog with one free local backend and one premium backend, both
/// reasoning-capable.
pub fn two_tier_catalog() -> BackendCatalog {
    let catalog = BackendCatalog::new();
    catalog.register(text_backend(
        "free-local",
        0.0,
        &[Capability::Reasoning, Capability::Streaming],
    ));
    catalog.register(text_backend(
        "premium",
        0.09,
        &[Capability::Reasoning, Capability::Coding, Capability::Streaming],
    ));
    catalog
}

/// A router over [`two_tier_catalog`].
pub fn two_tier_router() -> ModelRouter {
    ModelRouter::new(Arc::new(two_tier_catalog()))
}

/// A router over the default seeded catalog.
pub fn default_catalog_router() -> ModelRouter {
    ModelRouter::new(Arc::new(BackendCatalog::with_defaults()))
}
