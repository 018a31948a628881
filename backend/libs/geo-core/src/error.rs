use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Latitude or longitude is unparsable, non-finite or out of range
    #[error("invalid coordinate: {field} = {value:?} ({reason})")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Metric produced a NaN, infinite or negative distance
    #[error("invalid distance {distance} between points {first} and {second}")]
    InvalidDistance {
        distance: f64,
        first: usize,
        second: usize,
    },
}

impl GeoError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString, reason: &str) -> Self {
        GeoError::InvalidCoordinate {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
