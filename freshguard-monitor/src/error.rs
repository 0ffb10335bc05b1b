//! Monitor errors

use freshguard_core::FreshnessError;
use thiserror::Error;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Monitor-specific errors
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Rejected by the engine (unknown profile, reading in progress, ...)
    #[error(transparent)]
    Engine(#[from] FreshnessError),

    /// Configuration value could not be used
    #[error("Configuration error: {0}")]
    Config(String),

    /// The background reading task panicked or was cancelled
    #[error("Reading task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl MonitorError {
    /// True when a reading was refused because another one is in flight
    pub fn is_reading_in_progress(&self) -> bool {
        matches!(self, MonitorError::Engine(FreshnessError::ReadingInProgress))
    }
}
