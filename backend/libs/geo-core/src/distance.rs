//! Great-circle distance metrics

use crate::coordinate::Coordinate;
use crate::error::Result;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Distance between two coordinates, in meters.
///
/// Implementations must be symmetric and return `0.0` for identical points.
/// Results are not rounded; callers that report distances round them.
pub trait DistanceMetric {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64>;
}

/// Haversine formula on a spherical Earth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius_meters: f64,
}

impl Haversine {
    pub fn with_radius(radius_meters: f64) -> Self {
        Self { radius_meters }
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::with_radius(EARTH_RADIUS_METERS)
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64> {
        a.validate()?;
        b.validate()?;

        let lat1_rad = a.latitude.to_radians();
        let lat2_rad = b.latitude.to_radians();
        let delta_lat = (b.latitude - a.latitude).to_radians();
        let delta_lon = (b.longitude - a.longitude).to_radians();

        // near antipodes rounding can push h just past 1.0
        let h = ((delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        Ok(self.radius_meters * c)
    }
}
