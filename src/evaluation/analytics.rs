//! Descriptive statistics of a computed route.

use serde::{Deserialize, Serialize};

use super::directions::{legs, Leg};
use crate::distance::Haversine;
use crate::models::RouteResult;

/// Statistics derived from a [`RouteResult`].
///
/// Ratios that would divide by zero (a zero-length route or a zero time
/// estimate) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAnalytics {
    /// Number of hops, one less than the number of stops.
    pub leg_count: usize,
    /// Mean leg length in km; zero when there are no legs.
    pub average_leg_km: f64,
    /// Straight-line distance between the first and last stop, as a
    /// percentage of the route distance.
    pub efficiency_percent: Option<u32>,
    /// Estimated minutes per route kilometer.
    pub minutes_per_km: Option<f64>,
    /// Route distance over estimated time, in km/h.
    pub average_speed_kmh: Option<f64>,
    /// First leg with the greatest distance.
    pub longest_leg: Option<Leg>,
    /// First leg with the smallest distance.
    pub shortest_leg: Option<Leg>,
}

impl RouteAnalytics {
    /// Computes analytics for `result` using the same metric and time factor
    /// that produced it.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_planner::distance::Haversine;
    /// use route_planner::evaluation::RouteAnalytics;
    /// use route_planner::models::{Coordinates, Location, RouteResult};
    ///
    /// let stops = vec![
    ///     Location::new("a", "A", Coordinates::new(0.0, 0.0)),
    ///     Location::new("b", "B", Coordinates::new(0.0, 1.0)),
    ///     Location::new("c", "C", Coordinates::new(0.0, 3.0)),
    /// ];
    /// let result = RouteResult::new(stops, 333.58, 667);
    /// let stats = RouteAnalytics::from_result(&result, &Haversine::default(), 2.0);
    /// assert_eq!(stats.leg_count, 2);
    /// assert_eq!(stats.efficiency_percent, Some(100));
    /// assert_eq!(stats.longest_leg.map(|l| l.to_id), Some("c".to_string()));
    /// ```
    pub fn from_result(result: &RouteResult, metric: &Haversine, minutes_per_km: f64) -> Self {
        let stops = result.locations();
        let legs = legs(stops, metric, minutes_per_km);
        let total = result.total_distance();
        let time = f64::from(result.estimated_time());

        let average_leg_km = if legs.is_empty() {
            0.0
        } else {
            total / legs.len() as f64
        };

        let efficiency_percent = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) if total > 0.0 => {
                let direct = metric.distance(first.coordinates(), last.coordinates());
                Some((direct / total * 100.0).round() as u32)
            }
            _ => None,
        };

        let minutes_per_km = (total > 0.0).then(|| time / total);
        let average_speed_kmh = (time > 0.0).then(|| total / (time / 60.0));

        let mut longest: Option<&Leg> = None;
        let mut shortest: Option<&Leg> = None;
        for leg in &legs {
            if longest.map_or(true, |l| leg.distance_km > l.distance_km) {
                longest = Some(leg);
            }
            if shortest.map_or(true, |s| leg.distance_km < s.distance_km) {
                shortest = Some(leg);
            }
        }

        Self {
            leg_count: legs.len(),
            average_leg_km,
            efficiency_percent,
            minutes_per_km,
            average_speed_kmh,
            longest_leg: longest.cloned(),
            shortest_leg: shortest.cloned(),
        }
    }
}
