//! Booking overlap detection and housekeeper statement dispatch.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

use config::AppConfig;
use error::AppError;
use tracing::info;

/// Loads configuration and installs the tracing subscriber for a host process.
///
/// Call once at startup; a second call fails with a telemetry error.
pub fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(
        environment = ?config.environment,
        subject_prefix = %config.dispatch.subject_prefix,
        "sandpiper services configured"
    );
    Ok(config)
}
