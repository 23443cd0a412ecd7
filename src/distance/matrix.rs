//! Dense distance matrix.

use super::Haversine;
use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per route computation so that each pairwise haversine distance
/// is evaluated a single time.
///
/// # Examples
///
/// ```
/// use route_planner::distance::{DistanceMatrix, Haversine};
/// use route_planner::models::{Coordinates, Location};
///
/// let locations = vec![
///     Location::new("a", "A", Coordinates::new(0.0, 0.0)),
///     Location::new("b", "B", Coordinates::new(0.0, 1.0)),
///     Location::new("c", "C", Coordinates::new(0.0, 3.0)),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, &Haversine::default());
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a symmetric haversine matrix from location coordinates.
    pub fn from_locations(locations: &[Location], metric: &Haversine) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(locations[i].coordinates(), locations[j].coordinates());
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the position within `candidates` of the candidate nearest to
    /// `from`.
    ///
    /// Only a strictly smaller distance replaces the current best, so ties
    /// resolve to the earliest candidate. Returns `None` if `candidates` is
    /// empty.
    pub fn nearest_position(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &c) in candidates.iter().enumerate() {
            let d = self.get(from, c);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((pos, d)),
            }
        }
        best.map(|(pos, _)| pos)
    }
}
