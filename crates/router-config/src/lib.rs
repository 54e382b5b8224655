//! # Router Config
//!
//! Process configuration for deployments embedding the routing engine.
//!
//! Settings load from a TOML file with environment-variable overrides, and
//! the configured backend definitions are validated here, at the process
//! boundary, before they reach the catalog. The decision core itself never
//! validates; a malformed definition is a configuration error, not a
//! routing-time error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod settings;

// Re-export main types
pub use error::ConfigError;
pub use settings::{CatalogSettings, Environment, RouterSettings};
