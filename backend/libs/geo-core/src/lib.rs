//! Geographic primitives for Nova insights
//!
//! Provides validated WGS84 coordinates, great-circle distance metrics and an
//! all-pairs nearest neighbour search over small in-memory point sets.

pub mod coordinate;
pub mod distance;
pub mod error;
pub mod nearest;

pub use coordinate::Coordinate;
pub use distance::{DistanceMetric, Haversine, EARTH_RADIUS_METERS};
pub use error::{GeoError, Result};
pub use nearest::{Neighbor, NeighborEntry, NeighborResult, NearestNeighborFinder};
