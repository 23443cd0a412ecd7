//! Route distance and travel time totals.

use serde::{Deserialize, Serialize};

use crate::distance::Haversine;
use crate::models::Location;

/// Default travel time factor: 2 minutes per kilometer (30 km/h average).
pub const DEFAULT_MINUTES_PER_KM: f64 = 2.0;

/// Aggregate metrics of an ordered route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    /// Sum of consecutive leg distances in km, rounded to 2 decimals.
    pub total_distance: f64,
    /// `total_distance * minutes_per_km`, rounded to whole minutes.
    pub estimated_time: u32,
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a distance to whole minutes with a linear time model.
pub(crate) fn minutes_for(distance_km: f64, minutes_per_km: f64) -> u32 {
    // Inputs are validated to be finite and non-negative, so the cast does not saturate
    (distance_km * minutes_per_km).round() as u32
}

/// Sum of consecutive haversine legs along `route`, unrounded.
pub fn route_distance(route: &[Location], metric: &Haversine) -> f64 {
    route
        .windows(2)
        .map(|pair| metric.distance(pair[0].coordinates(), pair[1].coordinates()))
        .sum()
}

/// Computes the total distance and estimated time of an ordered route.
///
/// The route is open: there is no return leg to the first stop. The time
/// estimate is derived from the rounded distance.
///
/// # Examples
///
/// ```
/// use route_planner::distance::Haversine;
/// use route_planner::evaluation::{summarize, DEFAULT_MINUTES_PER_KM};
/// use route_planner::models::{Coordinates, Location};
///
/// let route = vec![
///     Location::new("a", "A", Coordinates::new(0.0, 0.0)),
///     Location::new("b", "B", Coordinates::new(0.0, 1.0)),
/// ];
/// let s = summarize(&route, &Haversine::default(), DEFAULT_MINUTES_PER_KM);
/// assert_eq!(s.total_distance, 111.19);
/// assert_eq!(s.estimated_time, 222);
/// ```
pub fn summarize(route: &[Location], metric: &Haversine, minutes_per_km: f64) -> RouteSummary {
    let total_distance = round2(route_distance(route, metric));
    RouteSummary {
        total_distance,
        estimated_time: minutes_for(total_distance, minutes_per_km),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn loc(id: &str, lat: f64, lng: f64) -> Location {
        Location::new(id, id, Coordinates::new(lat, lng))
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_empty_and_single() {
        let metric = Haversine::default();
        let s = summarize(&[], &metric, DEFAULT_MINUTES_PER_KM);
        assert_eq!(s.total_distance, 0.0);
        assert_eq!(s.estimated_time, 0);

        let s = summarize(&[loc("a", 1.0, 1.0)], &metric, DEFAULT_MINUTES_PER_KM);
        assert_eq!(s.total_distance, 0.0);
        assert_eq!(s.estimated_time, 0);
    }

    #[test]
    fn test_sum_of_legs() {
        let metric = Haversine::default();
        let route = vec![loc("a", 0.0, 0.0), loc("b", 0.0, 1.0), loc("c", 0.0, 3.0)];
        let expected = metric.distance(route[0].coordinates(), route[1].coordinates())
            + metric.distance(route[1].coordinates(), route[2].coordinates());
        let s = summarize(&route, &metric, DEFAULT_MINUTES_PER_KM);
        assert_eq!(s.total_distance, round2(expected));
        assert_eq!(s.estimated_time, (round2(expected) * 2.0).round() as u32);
    }

    #[test]
    fn test_open_route_has_no_return_leg() {
        let metric = Haversine::default();
        let route = vec![loc("a", 0.0, 0.0), loc("b", 0.0, 1.0)];
        let there = summarize(&route, &metric, 1.0).total_distance;
        assert!((there - 111.19).abs() < 1e-9);
    }

    #[test]
    fn test_custom_time_factor() {
        let metric = Haversine::default();
        let route = vec![loc("a", 0.0, 0.0), loc("b", 0.0, 1.0)];
        // 60 km/h
        let s = summarize(&route, &metric, 1.0);
        assert_eq!(s.estimated_time, 111);
    }

    #[test]
    fn test_coincident_route_is_zero() {
        let metric = Haversine::default();
        let route = vec![loc("a", -6.2, 106.8), loc("b", -6.2, 106.8)];
        let s = summarize(&route, &metric, DEFAULT_MINUTES_PER_KM);
        assert_eq!(s.total_distance, 0.0);
        assert_eq!(s.estimated_time, 0);
    }
}
