//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::distance::EARTH_RADIUS_KM;
use crate::error::{Result, RouteError};
use crate::evaluation::DEFAULT_MINUTES_PER_KM;

/// What to do with a location whose coordinates are non-finite or out of
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidCoordinatePolicy {
    /// Exclude the location and continue with the rest.
    #[default]
    Skip,
    /// Fail the whole computation with
    /// [`RouteError::InvalidCoordinate`].
    Reject,
}

/// Tunable parameters of [`RouteOptimizer`](super::RouteOptimizer).
///
/// Deserializes from partial JSON; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use route_planner::optimizer::{InvalidCoordinatePolicy, OptimizerConfig};
///
/// let config = OptimizerConfig::default()
///     .with_average_speed(40.0)
///     .with_invalid_coordinates(InvalidCoordinatePolicy::Reject);
/// assert_eq!(config.minutes_per_km, 1.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Linear travel time factor in minutes per kilometer.
    pub minutes_per_km: f64,
    /// Sphere radius used by the haversine metric.
    pub earth_radius_km: f64,
    /// Handling of locations with unusable coordinates.
    pub invalid_coordinates: InvalidCoordinatePolicy,
    /// Upper bound on input size; `None` means unbounded.
    pub max_locations: Option<usize>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            minutes_per_km: DEFAULT_MINUTES_PER_KM,
            earth_radius_km: EARTH_RADIUS_KM,
            invalid_coordinates: InvalidCoordinatePolicy::default(),
            max_locations: None,
        }
    }
}

impl OptimizerConfig {
    /// Sets the travel time factor directly.
    pub fn with_minutes_per_km(mut self, minutes_per_km: f64) -> Self {
        self.minutes_per_km = minutes_per_km;
        self
    }

    /// Sets the travel time factor from an average speed in km/h.
    pub fn with_average_speed(mut self, kmh: f64) -> Self {
        self.minutes_per_km = 60.0 / kmh;
        self
    }

    /// Sets the sphere radius.
    pub fn with_earth_radius(mut self, radius_km: f64) -> Self {
        self.earth_radius_km = radius_km;
        self
    }

    /// Sets the invalid coordinate policy.
    pub fn with_invalid_coordinates(mut self, policy: InvalidCoordinatePolicy) -> Self {
        self.invalid_coordinates = policy;
        self
    }

    /// Sets an upper bound on the number of input locations.
    pub fn with_max_locations(mut self, max: usize) -> Self {
        self.max_locations = Some(max);
        self
    }

    /// Checks that both factors are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("minutesPerKm", self.minutes_per_km),
            ("earthRadiusKm", self.earth_radius_km),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RouteError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}
