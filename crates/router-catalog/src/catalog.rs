//! The backend catalog: an insertion-ordered, process-lifetime table of
//! backend definitions.
//!
//! The table is guarded by a reader-writer lock so that post-startup
//! registration stays safe against concurrent routing reads. Typical
//! deployments register everything once at initialization and never write
//! again. Insertion order is the deterministic order for listing and for
//! tie-breaks; re-registering an id replaces the entry in place.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use router_core::{
    BackendDefinition, BackendKind, Capability, ComplianceDomain, Provider, RouterError,
    RouterResult,
};

use crate::seed::default_backends;

/// Filter criteria for [`BackendCatalog::list`].
///
/// All supplied criteria must match (logical AND).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendFilter {
    /// Restrict to a backend kind.
    pub kind: Option<BackendKind>,
    /// Restrict to a provider.
    pub provider: Option<Provider>,
    /// Restrict to backends carrying a capability.
    pub capability: Option<Capability>,
    /// Restrict to backends approved for a compliance domain.
    pub compliance_domain: Option<ComplianceDomain>,
    /// Exclude inactive backends. Defaults to true via [`BackendFilter::new`].
    pub only_active: bool,
    /// Restrict to recommended backends.
    pub only_recommended: bool,
}

impl BackendFilter {
    /// Creates a filter matching all active backends.
    #[must_use]
    pub fn new() -> Self {
        Self {
            only_active: true,
            ..Self::default()
        }
    }

    /// Restricts the filter to a kind.
    #[must_use]
    pub fn with_kind(mut self, kind: BackendKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts the filter to a provider.
    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Restricts the filter to backends carrying a capability.
    #[must_use]
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capability = Some(capability);
        self
    }

    /// Restricts the filter to a compliance domain.
    #[must_use]
    pub fn with_compliance_domain(mut self, domain: ComplianceDomain) -> Self {
        self.compliance_domain = Some(domain);
        self
    }

    /// Includes inactive backends in the results.
    #[must_use]
    pub fn include_inactive(mut self) -> Self {
        self.only_active = false;
        self
    }

    /// Restricts the filter to recommended backends.
    #[must_use]
    pub fn recommended_only(mut self) -> Self {
        self.only_recommended = true;
        self
    }

    fn matches(&self, def: &BackendDefinition) -> bool {
        if let Some(kind) = self.kind {
            if def.kind != kind {
                return false;
            }
        }
        if let Some(provider) = self.provider {
            if def.provider != provider {
                return false;
            }
        }
        if let Some(capability) = self.capability {
            if !def.supports_capability(capability) {
                return false;
            }
        }
        if let Some(domain) = self.compliance_domain {
            if !def.is_compliant_for(domain) {
                return false;
            }
        }
        if self.only_active && !def.active {
            return false;
        }
        if self.only_recommended && !def.recommended {
            return false;
        }
        true
    }
}

/// Central catalog of backend definitions.
///
/// Constructed explicitly and shared by reference (typically behind an
/// `Arc`); there is no global accessor. Entries are never deleted during
/// normal operation; deactivation via `active = false` is the deletion
/// substitute.
#[derive(Debug, Default)]
pub struct BackendCatalog {
    entries: RwLock<Vec<BackendDefinition>>,
}

impl BackendCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-seeded with the default backend list.
    #[must_use]
    pub fn with_defaults() -> Self {
        let catalog = Self::new();
        for def in default_backends() {
            catalog.register(def);
        }
        info!(total_backends = catalog.len(), "backend catalog initialized");
        catalog
    }

    /// Registers a backend, inserting or replacing the entry keyed by id.
    ///
    /// Replacement preserves the entry's original position so insertion
    /// order stays deterministic across re-registration. No field
    /// validation happens here; the configuration loader owns that.
    pub fn register(&self, def: BackendDefinition) {
        let mut entries = self.entries.write();
        debug!(backend_id = %def.id, upstream_name = %def.upstream_name, "backend registered");
        if let Some(existing) = entries.iter_mut().find(|e| e.id == def.id) {
            *existing = def;
        } else {
            entries.push(def);
        }
    }

    /// Returns the backend with the given id.
    ///
    /// Does not filter on `active`; an inactive entry is returned with a
    /// warning so forced selections against it remain observable.
    pub fn get(&self, id: &str) -> RouterResult<BackendDefinition> {
        let entries = self.entries.read();
        let def = entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| RouterError::backend_not_found(id))?;

        if !def.active {
            warn!(backend_id = %id, "inactive backend requested");
        }

        Ok(def)
    }

    /// Returns the backend with the given official provider-side name.
    pub fn get_by_upstream_name(&self, name: &str) -> RouterResult<BackendDefinition> {
        self.entries
            .read()
            .iter()
            .find(|e| e.upstream_name == name)
            .cloned()
            .ok_or_else(|| RouterError::backend_not_found(name))
    }

    /// Lists backends matching all supplied filter criteria, in insertion
    /// order.
    #[must_use]
    pub fn list(&self, filter: &BackendFilter) -> Vec<BackendDefinition> {
        self.entries
            .read()
            .iter()
            .filter(|def| filter.matches(def))
            .cloned()
            .collect()
    }

    /// Returns the recommended backend for a kind.
    ///
    /// When several entries of the kind are recommended, the
    /// first-registered one wins.
    pub fn recommended_for(&self, kind: BackendKind) -> RouterResult<BackendDefinition> {
        let filter = BackendFilter::new().with_kind(kind).recommended_only();
        self.list(&filter)
            .into_iter()
            .next()
            .ok_or_else(|| RouterError::no_eligible_backends(kind, Vec::new()))
    }

    /// Number of entries in the catalog, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
