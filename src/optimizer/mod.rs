//! Route computation entry point.
//!
//! [`RouteOptimizer`] validates a location snapshot, orders it with the
//! nearest-neighbor heuristic and summarizes the result. It holds only its
//! configuration, so a single instance can serve concurrent callers.

mod config;

pub use config::{InvalidCoordinatePolicy, OptimizerConfig};

use std::collections::HashSet;

use log::{debug, warn};

use crate::constructive::build_route;
use crate::distance::Haversine;
use crate::error::{Result, RouteError, MIN_ROUTE_LOCATIONS};
use crate::evaluation::{legs, summarize, Leg, RouteAnalytics};
use crate::models::{Coordinates, Location, RouteResult};

/// Computes visiting routes over a set of locations.
///
/// # Examples
///
/// ```
/// use route_planner::models::{Coordinates, Location};
/// use route_planner::optimizer::RouteOptimizer;
///
/// let locations = vec![
///     Location::new("1", "Monas", Coordinates::new(-6.175, 106.827)),
///     Location::new("2", "Menteng", Coordinates::new(-6.194, 106.823)),
///     Location::new("3", "Senayan", Coordinates::new(-6.219, 106.803)),
/// ];
///
/// let optimizer = RouteOptimizer::default();
/// let result = optimizer.compute_route(&locations, None).unwrap();
/// assert_eq!(result.optimized_order(), &["1", "2", "3"]);
/// assert!(result.total_distance() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
    metric: Haversine,
}

impl RouteOptimizer {
    /// Creates an optimizer after validating `config`.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        let metric = Haversine::new(config.earth_radius_km);
        Ok(Self { config, metric })
    }

    /// Active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Distance metric derived from the configuration.
    pub fn metric(&self) -> &Haversine {
        &self.metric
    }

    /// Haversine distance in km between two points.
    pub fn distance(&self, a: Coordinates, b: Coordinates) -> f64 {
        self.metric.distance(a, b)
    }

    /// Orders `locations` into a route and computes its totals.
    ///
    /// `start_hint` names the ID of the preferred first stop; an unknown ID
    /// falls back to the first valid location. The input is never modified.
    ///
    /// # Errors
    ///
    /// - [`RouteError::TooManyLocations`] if `max_locations` is exceeded
    /// - [`RouteError::DuplicateIdentifier`] if two locations share an ID
    /// - [`RouteError::InvalidCoordinate`] under
    ///   [`InvalidCoordinatePolicy::Reject`]
    /// - [`RouteError::InsufficientLocations`] if fewer than two valid
    ///   locations remain
    pub fn compute_route(
        &self,
        locations: &[Location],
        start_hint: Option<&str>,
    ) -> Result<RouteResult> {
        if let Some(max) = self.config.max_locations {
            if locations.len() > max {
                return Err(RouteError::TooManyLocations {
                    count: locations.len(),
                    max,
                });
            }
        }

        let mut seen = HashSet::with_capacity(locations.len());
        for location in locations {
            if !seen.insert(location.id()) {
                return Err(RouteError::DuplicateIdentifier {
                    id: location.id().to_string(),
                });
            }
        }

        let valid = self.valid_locations(locations)?;
        if valid.len() < MIN_ROUTE_LOCATIONS {
            return Err(RouteError::insufficient(valid.len()));
        }

        let route = build_route(&valid, start_hint, &self.metric);
        let summary = summarize(&route, &self.metric, self.config.minutes_per_km);
        debug!(
            "Computed route over {} stops: {} km, {} min",
            route.len(),
            summary.total_distance,
            summary.estimated_time
        );

        Ok(RouteResult::new(
            route,
            summary.total_distance,
            summary.estimated_time,
        ))
    }

    /// Per-leg directions for a computed route.
    pub fn directions(&self, result: &RouteResult) -> Vec<Leg> {
        legs(result.locations(), &self.metric, self.config.minutes_per_km)
    }

    /// Descriptive statistics for a computed route.
    pub fn analyze(&self, result: &RouteResult) -> RouteAnalytics {
        RouteAnalytics::from_result(result, &self.metric, self.config.minutes_per_km)
    }

    fn valid_locations(&self, locations: &[Location]) -> Result<Vec<Location>> {
        let mut valid = Vec::with_capacity(locations.len());
        for location in locations {
            let c = location.coordinates();
            if c.is_valid() {
                valid.push(location.clone());
                continue;
            }
            match self.config.invalid_coordinates {
                InvalidCoordinatePolicy::Skip => {
                    warn!(
                        "Skipping location '{}' with invalid coordinates ({}, {})",
                        location.id(),
                        c.lat,
                        c.lng
                    );
                }
                InvalidCoordinatePolicy::Reject => {
                    return Err(RouteError::InvalidCoordinate {
                        id: location.id().to_string(),
                        lat: c.lat,
                        lng: c.lng,
                    });
                }
            }
        }
        Ok(valid)
    }
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        let config = OptimizerConfig::default();
        let metric = Haversine::new(config.earth_radius_km);
        Self { config, metric }
    }
}
