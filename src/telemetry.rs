use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{directives}'")]
    Filter {
        directives: String,
        #[source]
        source: ParseError,
    },
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Directives used when `RUST_LOG` is unset: this crate at the configured
/// level, everything else at `warn`.
pub fn default_directives(config: &TelemetryConfig) -> String {
    format!("warn,sandpiper={}", config.log_level.trim())
}

fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directives = default_directives(config);
    match EnvFilter::try_new(&directives) {
        Ok(filter) => Ok(filter),
        Err(source) => Err(TelemetryError::Filter { directives, source }),
    }
}

/// Installs the process-wide subscriber used by the dispatch and overlap services.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .compact()
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}
