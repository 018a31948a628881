//! All-pairs nearest neighbour search
//!
//! Every unordered pair is evaluated exactly once and the single distance
//! updates both sides, so a run costs n·(n-1)/2 metric calls. There is no
//! spatial index: intended for point sets up to the low thousands.

use serde::Serialize;
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::distance::{DistanceMetric, Haversine};
use crate::error::{GeoError, Result};

/// Closest other point and the distance to it, rounded to whole meters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbor<I> {
    pub id: I,
    pub distance_meters: u64,
}

/// Result entry for one input point.
///
/// `nearest` is `None` only when the point had no other point to compare
/// against (single-point input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborEntry<I> {
    pub id: I,
    pub nearest: Option<Neighbor<I>>,
}

/// Nearest neighbour of every input point, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NeighborResult<I> {
    entries: Vec<NeighborEntry<I>>,
}

impl<I> NeighborResult<I> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NeighborEntry<I>> {
        self.entries.iter()
    }

    pub fn get(&self, id: &I) -> Option<&NeighborEntry<I>>
    where
        I: PartialEq,
    {
        self.entries.iter().find(|entry| &entry.id == id)
    }
}

impl<I> IntoIterator for NeighborResult<I> {
    type Item = NeighborEntry<I>;
    type IntoIter = std::vec::IntoIter<NeighborEntry<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, I> IntoIterator for &'a NeighborResult<I> {
    type Item = &'a NeighborEntry<I>;
    type IntoIter = std::slice::Iter<'a, NeighborEntry<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NearestNeighborFinder<M = Haversine> {
    metric: M,
}

impl NearestNeighborFinder<Haversine> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: DistanceMetric> NearestNeighborFinder<M> {
    pub fn with_metric(metric: M) -> Self {
        Self { metric }
    }

    /// Find the closest other point for every point.
    ///
    /// Ties keep the first candidate met in pair order: a later candidate
    /// only replaces the recorded one when strictly closer. Nearest
    /// relationships are not symmetric. Fails on the first invalid
    /// coordinate, or on a NaN, infinite or negative distance from the
    /// metric, without returning partial results.
    pub fn find_nearest<I: Clone>(&self, points: &[(I, Coordinate)]) -> Result<NeighborResult<I>> {
        for (_, coordinate) in points {
            coordinate.validate()?;
        }

        let n = points.len();
        // (neighbour index, rounded meters); None stands for +inf
        let mut best: Vec<Option<(usize, u64)>> = vec![None; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let distance = self.metric.distance(&points[i].1, &points[j].1)?;
                if !distance.is_finite() || distance < 0.0 {
                    return Err(GeoError::InvalidDistance {
                        distance,
                        first: i,
                        second: j,
                    });
                }
                let meters = distance.round() as u64;

                if improves(best[i], meters) {
                    best[i] = Some((j, meters));
                }
                if improves(best[j], meters) {
                    best[j] = Some((i, meters));
                }
            }
        }

        debug!(
            points = n,
            pairs = n.saturating_sub(1) * n / 2,
            "nearest neighbour search completed"
        );

        let entries = points
            .iter()
            .zip(best)
            .map(|((id, _), slot)| NeighborEntry {
                id: id.clone(),
                nearest: slot.map(|(index, distance_meters)| Neighbor {
                    id: points[index].0.clone(),
                    distance_meters,
                }),
            })
            .collect();

        Ok(NeighborResult { entries })
    }
}

fn improves(current: Option<(usize, u64)>, candidate: u64) -> bool {
    match current {
        None => true,
        Some((_, recorded)) => candidate < recorded,
    }
}
