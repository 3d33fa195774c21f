//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`
//! - `RUST_LOG` wins over the configured filter
//! - Per-request spans come from tower-http's `TraceLayer`

pub mod logging;

pub use logging::init_logging;
