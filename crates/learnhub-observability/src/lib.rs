//! Observability infrastructure for LearnHub tools.
//!
//! This crate provides:
//! - `RunId` - Identifier correlating every log line of one invocation
//! - `StructuredLogger` - Structured command logging with run context
//! - `init_tracing` - `tracing` subscriber setup for library events
//! - `MetricsCollector` - Per-query timing metrics

mod error;
mod logging;
mod metrics;
mod run_id;
mod subscriber;

pub use error::ObservabilityError;
pub use logging::*;
pub use metrics::*;
pub use run_id::RunId;
pub use subscriber::{init_tracing, LOG_ENV_VAR};
