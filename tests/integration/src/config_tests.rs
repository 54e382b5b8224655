//! Configuration-driven catalog construction.

use pretty_assertions::assert_eq;
use router_config::{ConfigError, RouterSettings};
use router_engine::{ModelRouter, RouteRequest};
use std::sync::Arc;

const DEPLOYMENT_CONFIG: &str = r#"
environment = "production"
log_level = "warn"

[catalog]
seed_defaults = true

[[catalog.backends]]
id = "tenant-tuned"
provider = "mistral"
display_name = "Tenant Tuned 7B"
upstream_name = "mistral/tenant-tuned:7b"
kind = "text"
capabilities = ["reasoning", "streaming"]
max_context_tokens = 32768

[catalog.backends.pricing]
input_cost_per_1k_tokens = 0.0002
output_cost_per_1k_tokens = 0.0006

[catalog.backends.latency]
p50_ms = 400
p95_ms = 900
p99_ms = 1600
"#;

#[test]
fn test_configured_backend_joins_the_routing_pool() {
    let settings = RouterSettings::from_toml_str(DEPLOYMENT_CONFIG).unwrap();
    let catalog = settings.build_catalog().unwrap();
    assert!(catalog.get("tenant-tuned").is_ok());

    let router = ModelRouter::new(Arc::new(catalog));
    let decision = router.route(&RouteRequest::new("hi")).unwrap();
    // routing still works over the merged pool
    assert!(decision.estimated_cost_usd >= 0.0);
}

#[test]
fn test_settings_fields_parse() {
    let settings = RouterSettings::from_toml_str(DEPLOYMENT_CONFIG).unwrap();
    assert_eq!(settings.environment.to_string(), "production");
    assert_eq!(settings.log_level, "warn");
    assert_eq!(settings.catalog.backends.len(), 1);
}

#[test]
fn test_invalid_backend_definitions_fail_the_load() {
    let broken = DEPLOYMENT_CONFIG.replace(
        "input_cost_per_1k_tokens = 0.0002",
        "input_cost_per_1k_tokens = -1.0",
    );
    let settings = RouterSettings::from_toml_str(&broken).unwrap();
    let err = settings.build_catalog().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("tenant-tuned"));
}
