//! # Router Core
//!
//! Core types and error handling for the model routing engine.
//!
//! This crate provides the foundational types used throughout the router:
//! - Backend definitions with capability, pricing, and latency metadata
//! - Closed enums for kinds, capabilities, providers, and compliance domains
//! - The shared error type and result alias

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod error;

// Re-export commonly used types
pub use backend::{
    BackendDefinition, BackendKind, BackendPricing, Capability, ComplianceDomain, LatencyProfile,
    Provider,
};
pub use error::{RouterError, RouterResult};
