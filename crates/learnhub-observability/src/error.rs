//! Observability error types.

use thiserror::Error;

/// Errors raised while setting up logging.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    /// A global subscriber was already installed.
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),

    /// Unknown log level name.
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// Unknown log format name.
    #[error("Unknown log format: {0} (expected human or json)")]
    UnknownFormat(String),
}
