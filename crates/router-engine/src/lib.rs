//! # Router Engine
//!
//! The routing algorithm: given a classified request profile and the backend
//! catalog, select a primary backend plus an ordered fallback list, with a
//! cost estimate and a human-readable rationale.
//!
//! Selection is tier-based, not a numeric optimizer: simple requests take
//! the cheapest eligible backend, complex requests take the most expensive
//! one (cost as a capability proxy, a documented simplification), and
//! moderate requests take the middle of the cost-ordered candidate list.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decision;
pub mod router;

// Re-export main types
pub use decision::{RouteRequest, RoutingDecision};
pub use router::ModelRouter;
