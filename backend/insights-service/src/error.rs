use geo_core::GeoError;
use nova_common::ServiceError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("record source error: {0}")]
    Source(#[from] ServiceError),

    #[error("malformed record {record}: {reason}")]
    MalformedRecord { record: String, reason: String },

    #[error("invalid coordinate in {record}: {source}")]
    InvalidCoordinate {
        record: String,
        #[source]
        source: GeoError,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl AppError {
    pub(crate) fn malformed(record: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::MalformedRecord {
            record: record.into(),
            reason: reason.into(),
        }
    }

    /// Only upstream failures can succeed on a second attempt; bad records
    /// and coordinates fail the same way every time
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Source(e) => e.is_retryable(),
            _ => false,
        }
    }
}
