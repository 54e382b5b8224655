//! Error types for the routing engine.
//!
//! Every lookup failure in the engine is a form of "not found": either a
//! backend id that does not resolve, or a kind/capability combination that no
//! catalog entry satisfies. All failures are terminal for the call; the
//! caller decides whether to retry with relaxed constraints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::{BackendKind, Capability};

/// Errors that can occur during catalog lookups and routing.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum RouterError {
    /// The requested backend id is not present in the catalog.
    #[error("Backend '{id}' not found in catalog")]
    BackendNotFound {
        /// The backend identifier that failed to resolve.
        id: String,
    },

    /// No catalog entry satisfies the required kind and capability set.
    #[error("No eligible backends for kind={kind}, required capabilities={capabilities:?}")]
    NoEligibleBackends {
        /// The backend kind the request required.
        kind: BackendKind,
        /// The capabilities the request required.
        capabilities: Vec<Capability>,
    },
}

impl RouterError {
    /// Creates a backend-not-found error.
    #[must_use]
    pub fn backend_not_found(id: impl Into<String>) -> Self {
        Self::BackendNotFound { id: id.into() }
    }

    /// Creates a no-eligible-backends error.
    #[must_use]
    pub fn no_eligible_backends(kind: BackendKind, capabilities: Vec<Capability>) -> Self {
        Self::NoEligibleBackends { kind, capabilities }
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BackendNotFound { .. } => "BACKEND_NOT_FOUND",
            Self::NoEligibleBackends { .. } => "NO_ELIGIBLE_BACKENDS",
        }
    }
}

/// Result type for routing operations.
pub type RouterResult<T> = Result<T, RouterError>;
