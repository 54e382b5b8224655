//! Catalog behavior under realistic registration sequences.

use pretty_assertions::assert_eq;
use router_catalog::{BackendCatalog, BackendFilter};
use router_core::{BackendKind, Capability, Provider};

use crate::fixtures::text_backend;

#[test]
fn test_reregistration_keeps_one_entry_per_id() {
    let catalog = BackendCatalog::new();
    for _ in 0..3 {
        catalog.register(text_backend("a", 0.01, &[]));
        catalog.register(text_backend("b", 0.02, &[]));
    }
    catalog.register(text_backend("a", 0.05, &[Capability::Reasoning]));

    assert_eq!(catalog.len(), 2);
    let a = catalog.get("a").unwrap();
    // the latest registration wins
    assert!(a.supports_capability(Capability::Reasoning));
    assert!((a.pricing.combined_per_1k() - 0.05).abs() < 1e-12);
}

#[test]
fn test_listing_preserves_registration_order() {
    let catalog = BackendCatalog::new();
    for id in ["zeta", "alpha", "mid"] {
        catalog.register(text_backend(id, 0.01, &[]));
    }

    let ids: Vec<String> = catalog
        .list(&BackendFilter::new())
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_default_catalog_recommended_lookups() {
    let catalog = BackendCatalog::with_defaults();

    let text = catalog.recommended_for(BackendKind::Text).unwrap();
    assert!(text.active);
    assert!(text.recommended);

    let embedding = catalog.recommended_for(BackendKind::Embedding).unwrap();
    assert_eq!(embedding.kind, BackendKind::Embedding);

    assert!(catalog.recommended_for(BackendKind::Audio).is_err());
}

#[test]
fn test_filters_compose_over_default_catalog() {
    let catalog = BackendCatalog::with_defaults();

    let local_text = catalog.list(
        &BackendFilter::new()
            .with_kind(BackendKind::Text)
            .with_provider(Provider::Local),
    );
    assert!(!local_text.is_empty());
    assert!(local_text
        .iter()
        .all(|d| d.kind == BackendKind::Text && d.provider == Provider::Local));

    let streaming_reasoners = catalog.list(
        &BackendFilter::new()
            .with_capability(Capability::Reasoning)
            .with_kind(BackendKind::Text),
    );
    assert!(streaming_reasoners
        .iter()
        .all(|d| d.supports_capability(Capability::Reasoning)));
}

#[test]
fn test_deactivated_entries_survive_but_stop_matching() {
    let catalog = BackendCatalog::new();
    catalog.register(text_backend("a", 0.01, &[]));
    let retired = text_backend("a", 0.01, &[]).deactivated();
    catalog.register(retired);

    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("a").is_ok());
    assert!(catalog.list(&BackendFilter::new()).is_empty());
}
