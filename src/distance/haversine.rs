//! Great-circle distance on a spherical Earth.

use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance metric with a configurable sphere radius.
///
/// # Examples
///
/// ```
/// use route_planner::distance::Haversine;
/// use route_planner::models::Coordinates;
///
/// let metric = Haversine::default();
/// let a = Coordinates::new(0.0, 0.0);
/// let b = Coordinates::new(0.0, 1.0);
/// assert!((metric.distance(a, b) - 111.19).abs() < 0.01);
/// assert_eq!(metric.distance(a, a), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Haversine {
    radius_km: f64,
}

impl Haversine {
    /// Creates a metric on a sphere of the given radius (km).
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Sphere radius in kilometers.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Great-circle distance between `a` and `b` in kilometers.
    ///
    /// Exactly symmetric, zero for identical points, and never NaN for
    /// finite inputs (antipodal and polar points included).
    pub fn distance(&self, a: Coordinates, b: Coordinates) -> f64 {
        let lat_a = a.lat.to_radians();
        let lat_b = b.lat.to_radians();
        let half_dlat = (b.lat - a.lat).to_radians() / 2.0;
        let half_dlng = (b.lng - a.lng).to_radians() / 2.0;

        let sin_dlat = half_dlat.sin();
        let sin_dlng = half_dlng.sin();
        let h = sin_dlat * sin_dlat + lat_a.cos() * lat_b.cos() * sin_dlng * sin_dlng;
        // Rounding can push h just outside [0, 1] near the poles and antipodes.
        let h = h.clamp(0.0, 1.0);

        2.0 * self.radius_km * h.sqrt().atan2((1.0 - h).sqrt())
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }
}

/// Haversine distance in kilometers using the mean Earth radius.
pub fn haversine_distance(a: Coordinates, b: Coordinates) -> f64 {
    Haversine::default().distance(a, b)
}
