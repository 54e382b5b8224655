//! Router settings: TOML-backed, environment-overridable.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use router_catalog::BackendCatalog;
use router_core::BackendDefinition;

use crate::error::ConfigError;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Local development.
    #[default]
    Development,
    /// Pre-production staging.
    Staging,
    /// Production.
    Production,
}

impl Environment {
    /// Returns the lowercase name of this environment.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::invalid(format!(
                "unknown environment '{other}'"
            ))),
        }
    }
}

/// Catalog seeding controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Whether to seed the catalog with the built-in default backends.
    #[serde(default = "default_true")]
    pub seed_defaults: bool,

    /// Extra backend definitions to register after seeding.
    ///
    /// Entries here replace a default entry with the same id.
    #[serde(default)]
    pub backends: Vec<BackendDefinition>,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            backends: Vec::new(),
        }
    }
}

/// Top-level settings for a process embedding the router.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterSettings {
    /// Deployment environment.
    #[serde(default)]
    pub environment: Environment,

    /// Log level filter directive (e.g. "info", "router_engine=debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Catalog seeding controls.
    #[serde(default)]
    pub catalog: CatalogSettings,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            catalog: CatalogSettings::default(),
        }
    }
}

impl RouterSettings {
    /// Parses settings from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(raw)?;
        Ok(settings)
    }

    /// Loads settings from a TOML file, applies environment overrides, and
    /// validates the configured backend definitions.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut settings = Self::from_toml_str(&raw)?;
        settings.apply_env_overrides();
        settings.validate_backends()?;
        info!(
            environment = %settings.environment,
            configured_backends = settings.catalog.backends.len(),
            "router settings loaded"
        );
        Ok(settings)
    }

    /// Applies `ROUTER_ENVIRONMENT` and `ROUTER_LOG_LEVEL` overrides.
    ///
    /// An unparseable environment value is ignored with a warning rather
    /// than failing startup.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("ROUTER_ENVIRONMENT") {
            match value.parse() {
                Ok(env) => self.environment = env,
                Err(_) => warn!(value = %value, "ignoring invalid ROUTER_ENVIRONMENT"),
            }
        }
        if let Ok(value) = std::env::var("ROUTER_LOG_LEVEL") {
            self.log_level = value;
        }
    }

    /// Validates every configured backend definition.
    ///
    /// This is the single enforcement point for catalog field invariants:
    /// non-negative costs, non-empty identity fields, ordered latency
    /// percentiles.
    pub fn validate_backends(&self) -> Result<(), ConfigError> {
        for def in &self.catalog.backends {
            def.validate().map_err(|errors| {
                ConfigError::invalid(format!("backend '{}': {errors}", def.id))
            })?;
            if !def.latency.is_ordered() {
                return Err(ConfigError::invalid(format!(
                    "backend '{}': latency percentiles must satisfy p50 <= p95 <= p99",
                    def.id
                )));
            }
        }
        Ok(())
    }

    /// Builds a catalog per these settings.
    ///
    /// Seeds the defaults when configured, then registers the extra
    /// definitions in file order (replacing same-id defaults). Validates
    /// first, so a programmatically constructed settings value gets the
    /// same enforcement as a loaded file.
    pub fn build_catalog(&self) -> Result<BackendCatalog, ConfigError> {
        self.validate_backends()?;

        let catalog = if self.catalog.seed_defaults {
            BackendCatalog::with_defaults()
        } else {
            BackendCatalog::new()
        };
        for def in &self.catalog.backends {
            catalog.register(def.clone());
        }
        Ok(catalog)
    }
}
