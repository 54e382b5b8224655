//! End-to-end routing scenarios.
//!
//! These follow the observable contract surface: selected backend id,
//! fallback ids, rationale, estimated cost, and profile fields.

use pretty_assertions::assert_eq;
use router_core::{BackendKind, Capability, RouterError};
use router_engine::RouteRequest;

use crate::fixtures::*;

#[test]
fn test_greeting_routes_to_free_backend() {
    let router = two_tier_router();
    let decision = router.route(&RouteRequest::new("hi")).unwrap();

    assert_eq!(decision.selected.id, "free-local");
    assert_eq!(decision.estimated_cost_usd, 0.0);
    assert_eq!(decision.profile.modality.to_string(), "text");
}

#[test]
fn test_analytical_query_routes_to_premium_backend() {
    let router = two_tier_router();
    let query = "Analyze and compare the algorithmic complexity of these two sorting strategies and explain why one dominates";
    let decision = router.route(&RouteRequest::new(query)).unwrap();

    assert_eq!(decision.selected.id, "premium");
    assert!(decision.profile.requires_reasoning);
    assert!(decision.profile.reasoning_score > 0.8);
}

#[test]
fn test_selected_backend_never_in_own_fallbacks() {
    let router = default_catalog_router();
    for query in [
        "hi",
        "the glacier looked stable because meltwater drained overnight",
        "Analyze and compare the algorithmic complexity of these two sorting strategies and explain why one dominates",
    ] {
        let decision = router.route(&RouteRequest::new(query)).unwrap();
        assert!(
            !decision.fallback_ids().contains(&decision.selected.id.as_str()),
            "query: {query}"
        );
        assert!(decision.fallbacks.len() <= 2, "query: {query}");
    }
}

#[test]
fn test_forced_unknown_backend_fails_naming_it() {
    let router = two_tier_router();
    let err = router
        .route(&RouteRequest::new("anything at all").force_backend("X"))
        .unwrap_err();

    assert_eq!(err, RouterError::backend_not_found("X"));
    assert!(err.to_string().contains("'X'"));
}

#[test]
fn test_forced_backend_skips_cost_estimation() {
    let router = two_tier_router();
    let decision = router
        .route(&RouteRequest::new("hi").force_backend("premium"))
        .unwrap();

    assert_eq!(decision.selected.id, "premium");
    assert_eq!(decision.estimated_cost_usd, 0.0);
    assert!(decision.fallbacks.is_empty());
    assert_eq!(decision.rationale, "Backend explicitly specified");
}

#[test]
fn test_audio_request_against_textless_catalog_names_the_gap() {
    let router = two_tier_router();
    let err = router
        .route(&RouteRequest::new("summarize this recording").with_audio(true))
        .unwrap_err();

    match err {
        RouterError::NoEligibleBackends { kind, capabilities } => {
            assert_eq!(kind, BackendKind::Audio);
            assert!(capabilities.contains(&Capability::Audio));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_image_request_routes_to_multimodal_backend() {
    let router = default_catalog_router();
    let decision = router
        .route(&RouteRequest::new("describe the scene").with_images(true))
        .unwrap();

    assert_eq!(decision.selected.kind, BackendKind::Multimodal);
    assert!(decision.selected.supports_capability(Capability::Vision));
    assert!(decision.rationale.contains("Supports image input"));
}

#[test]
fn test_rationale_always_ends_with_cost_clause() {
    let router = default_catalog_router();
    for query in ["hi", "write a story about a lighthouse keeper and her telescope"] {
        let decision = router.route(&RouteRequest::new(query)).unwrap();
        let last = decision.rationale.split("; ").last().unwrap();
        assert!(last.starts_with("Est. cost: $"), "query: {query}");
        assert!(last.ends_with("per 1K tokens"), "query: {query}");
    }
}

#[test]
fn test_decision_serializes_with_stable_contract_fields() {
    let router = two_tier_router();
    let decision = router.route(&RouteRequest::new("hi")).unwrap();

    let json = serde_json::to_value(&decision).unwrap();
    assert!(json.get("selected").is_some());
    assert!(json.get("fallbacks").is_some());
    assert!(json.get("rationale").is_some());
    assert!(json.get("estimated_cost_usd").is_some());
    assert_eq!(json["profile"]["complexity"], "simple");
}

#[test]
fn test_repeated_routing_is_identical() {
    let router = default_catalog_router();
    let request =
        RouteRequest::new("evaluate the trade-offs of caching layers under heavy write load");

    let first = router.route(&request).unwrap();
    for _ in 0..5 {
        assert_eq!(router.route(&request).unwrap(), first);
    }
}
