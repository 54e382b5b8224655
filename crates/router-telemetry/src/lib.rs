//! # Router Telemetry
//!
//! Structured logging setup for processes embedding the routing engine.
//!
//! The engine crates emit `tracing` events; this crate owns subscriber
//! installation so binaries and test harnesses configure output in one
//! place. Metrics and trace export pipelines are out of scope; the engine's
//! observability surface is structured log events only.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod tracing_setup;

// Re-export main types
pub use tracing_setup::{init_tracing, TelemetryError, TracingConfig};
