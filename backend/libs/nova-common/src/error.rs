//! Unified error handling for calls to upstream services

use thiserror::Error;

/// Result type alias for upstream calls
pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Client could not be built or was misused
    #[error("Internal error: {0}")]
    Internal(String),

    /// Upstream answered 503
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request did not finish within the configured timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Transport failure, non-success status or undecodable body
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl ServiceError {
    /// Whether a caller may reasonably try again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_) | Self::Timeout(_))
    }
}
