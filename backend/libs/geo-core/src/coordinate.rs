//! WGS84 coordinate in decimal degrees

use serde::Serialize;

use crate::error::{GeoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    /// Latitude (-90 to 90)
    pub latitude: f64,
    /// Longitude (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Parse a coordinate from the numeric strings served by upstream APIs
    /// (e.g. `"50.049683"`, `"-3.703790"`).
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        let lat = parse_degrees("latitude", latitude)?;
        let lng = parse_degrees("longitude", longitude)?;
        Self::new(lat, lng)
    }

    /// Check that both components are finite and inside their ranges.
    pub fn validate(&self) -> Result<()> {
        check_range("latitude", self.latitude, 90.0)?;
        check_range("longitude", self.longitude, 180.0)
    }
}

fn parse_degrees(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| GeoError::invalid(field, raw, &e.to_string()))
}

fn check_range(field: &'static str, value: f64, bound: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GeoError::invalid(field, value, "must be a finite number"));
    }
    if !(-bound..=bound).contains(&value) {
        return Err(GeoError::invalid(
            field,
            value,
            &format!("must be between -{} and {}", bound, bound),
        ));
    }
    Ok(())
}
