//! Global `tracing` subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ObservabilityError;
use crate::logging::{LogFormat, LogLevel};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "LEARNHUB_LOG";

/// Install the process-wide subscriber. Events go to stderr.
///
/// `LEARNHUB_LOG`, when set, replaces `level` as the filter directive.
pub fn init_tracing(level: LogLevel, format: LogFormat) -> Result<(), ObservabilityError> {
    let env = std::env::var(LOG_ENV_VAR).ok();
    let directive = filter_directive(level, env.as_deref());
    let filter = EnvFilter::try_new(&directive).map_err(|e| ObservabilityError::InvalidFilter {
        directive: directive.clone(),
        reason: e.to_string(),
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Human => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}

/// Pick the filter directive: a non-blank override wins over `level`.
fn filter_directive(level: LogLevel, env_override: Option<&str>) -> String {
    match env_override.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => level.as_directive().to_string(),
    }
}
