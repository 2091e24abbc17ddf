use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::booking::OverlapCheckError;
use crate::workflows::housekeeping::StatementDispatchError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Overlap(OverlapCheckError),
    Dispatch(StatementDispatchError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Overlap(err) => write!(f, "overlap check failed: {}", err),
            AppError::Dispatch(err) => write!(f, "statement dispatch failed: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Overlap(err) => Some(err),
            AppError::Dispatch(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<OverlapCheckError> for AppError {
    fn from(value: OverlapCheckError) -> Self {
        Self::Overlap(value)
    }
}

impl From<StatementDispatchError> for AppError {
    fn from(value: StatementDispatchError) -> Self {
        Self::Dispatch(value)
    }
}
