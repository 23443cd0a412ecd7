//! Route result type.

use serde::{Deserialize, Serialize};

use super::Location;

/// A computed visiting order with its aggregate metrics.
///
/// Owns a snapshot of the locations it was computed from; it is never
/// updated in place. A new result is produced for every request.
///
/// # Examples
///
/// ```
/// use route_planner::models::{Coordinates, Location, RouteResult};
///
/// let stops = vec![
///     Location::new("a", "A", Coordinates::new(0.0, 0.0)),
///     Location::new("b", "B", Coordinates::new(0.0, 1.0)),
/// ];
/// let result = RouteResult::new(stops, 111.19, 222);
/// assert_eq!(result.optimized_order(), &["a".to_string(), "b".to_string()]);
/// assert_eq!(result.num_stops(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawRouteResult")]
pub struct RouteResult {
    locations: Vec<Location>,
    optimized_order: Vec<String>,
    total_distance: f64,
    estimated_time: u32,
}

/// Wire form of [`RouteResult`]. Any `optimizedOrder` sent in is ignored and
/// rebuilt from `locations`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRouteResult {
    locations: Vec<Location>,
    total_distance: f64,
    estimated_time: u32,
}

impl From<RawRouteResult> for RouteResult {
    fn from(raw: RawRouteResult) -> Self {
        Self::new(raw.locations, raw.total_distance, raw.estimated_time)
    }
}

impl RouteResult {
    /// Creates a result from an ordered route. `optimized_order` is derived
    /// from `locations`.
    pub fn new(locations: Vec<Location>, total_distance: f64, estimated_time: u32) -> Self {
        let optimized_order = locations.iter().map(|l| l.id().to_string()).collect();
        Self {
            locations,
            optimized_order,
            total_distance,
            estimated_time,
        }
    }

    /// Locations in visiting order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location IDs in visiting order.
    pub fn optimized_order(&self) -> &[String] {
        &self.optimized_order
    }

    /// Total route distance in kilometers, rounded to 2 decimals.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Estimated travel time in whole minutes.
    pub fn estimated_time(&self) -> u32 {
        self.estimated_time
    }

    /// Number of stops on the route.
    pub fn num_stops(&self) -> usize {
        self.locations.len()
    }

    /// First stop, if any.
    pub fn start(&self) -> Option<&Location> {
        self.locations.first()
    }
}
