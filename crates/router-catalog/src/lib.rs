//! # Router Catalog
//!
//! The in-memory backend catalog for the model routing engine.
//!
//! The catalog is the single source of truth for which backends exist, what
//! they can do, and what they cost. It is read by every routing call and
//! written only at initialization or through explicit registration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod seed;

// Re-export main types
pub use catalog::{BackendCatalog, BackendFilter};
pub use seed::default_backends;
