//! Leg-by-leg directions along an ordered route.

use serde::{Deserialize, Serialize};

use super::summary::minutes_for;
use crate::distance::Haversine;
use crate::models::{Coordinates, Location};

/// Dominant compass direction of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// Increasing latitude.
    North,
    /// Increasing longitude.
    East,
    /// Decreasing latitude.
    South,
    /// Decreasing longitude.
    West,
}

impl Heading {
    /// Picks the dominant axis of travel between two points.
    ///
    /// East/West when the longitude change is strictly larger than the
    /// latitude change, North/South otherwise. A zero change on the chosen
    /// axis reads as South or West.
    pub fn between(from: Coordinates, to: Coordinates) -> Self {
        let dlat = to.lat - from.lat;
        let dlng = to.lng - from.lng;
        if dlng.abs() > dlat.abs() {
            if dlng > 0.0 {
                Heading::East
            } else {
                Heading::West
            }
        } else if dlat > 0.0 {
            Heading::North
        } else {
            Heading::South
        }
    }
}

/// One hop between consecutive stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Position of the leg on the route, starting at 0.
    pub index: usize,
    /// ID of the stop the leg leaves from.
    pub from_id: String,
    /// Name of the stop the leg leaves from.
    pub from_name: String,
    /// ID of the stop the leg arrives at.
    pub to_id: String,
    /// Name of the stop the leg arrives at.
    pub to_name: String,
    /// Unrounded haversine distance in km.
    pub distance_km: f64,
    /// `distance_km * minutes_per_km`, rounded to whole minutes.
    pub estimated_minutes: u32,
    /// Dominant direction of travel.
    pub heading: Heading,
}

/// Breaks an ordered route into legs.
///
/// Returns an empty vector for routes with fewer than two stops.
///
/// # Examples
///
/// ```
/// use route_planner::distance::Haversine;
/// use route_planner::evaluation::{legs, Heading};
/// use route_planner::models::{Coordinates, Location};
///
/// let route = vec![
///     Location::new("a", "Depot", Coordinates::new(0.0, 0.0)),
///     Location::new("b", "Shop", Coordinates::new(0.0, 0.1)),
/// ];
/// let legs = legs(&route, &Haversine::default(), 2.0);
/// assert_eq!(legs.len(), 1);
/// assert_eq!(legs[0].heading, Heading::East);
/// assert_eq!(legs[0].to_name, "Shop");
/// ```
pub fn legs(route: &[Location], metric: &Haversine, minutes_per_km: f64) -> Vec<Leg> {
    route
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (from, to) = (&pair[0], &pair[1]);
            let distance_km = metric.distance(from.coordinates(), to.coordinates());
            Leg {
                index,
                from_id: from.id().to_string(),
                from_name: from.name().to_string(),
                to_id: to.id().to_string(),
                to_name: to.name().to_string(),
                distance_km,
                estimated_minutes: minutes_for(distance_km, minutes_per_km),
                heading: Heading::between(from.coordinates(), to.coordinates()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_axes() {
        let origin = Coordinates::new(0.0, 0.0);
        assert_eq!(Heading::between(origin, Coordinates::new(1.0, 0.5)), Heading::North);
        assert_eq!(Heading::between(origin, Coordinates::new(-1.0, 0.5)), Heading::South);
        assert_eq!(Heading::between(origin, Coordinates::new(0.5, 1.0)), Heading::East);
        assert_eq!(Heading::between(origin, Coordinates::new(0.5, -1.0)), Heading::West);
    }

    #[test]
    fn test_heading_degenerate() {
        let p = Coordinates::new(3.0, 3.0);
        assert_eq!(Heading::between(p, p), Heading::South);
        // equal magnitudes fall to the latitude axis
        assert_eq!(Heading::between(p, Coordinates::new(4.0, 4.0)), Heading::North);
    }

    #[test]
    fn test_legs_fields() {
        let route = vec![
            Location::new("1", "CBD", Coordinates::new(-6.2088, 106.8456)),
            Location::new("2", "Menteng", Coordinates::new(-6.1944, 106.8229)),
            Location::new("3", "Senayan", Coordinates::new(-6.2187, 106.8025)),
        ];
        let metric = Haversine::default();
        let legs = legs(&route, &metric, 2.0);
        assert_eq!(legs.len(), 2);

        assert_eq!(legs[0].index, 0);
        assert_eq!(legs[0].from_id, "1");
        assert_eq!(legs[0].to_id, "2");
        assert_eq!(legs[0].heading, Heading::West);
        let d = metric.distance(route[0].coordinates(), route[1].coordinates());
        assert_eq!(legs[0].distance_km, d);
        assert_eq!(legs[0].estimated_minutes, (d * 2.0).round() as u32);

        assert_eq!(legs[1].from_name, "Menteng");
        assert_eq!(legs[1].to_name, "Senayan");
    }

    #[test]
    fn test_no_legs_for_short_routes() {
        let metric = Haversine::default();
        assert!(legs(&[], &metric, 2.0).is_empty());
        let one = vec![Location::new("a", "A", Coordinates::new(0.0, 0.0))];
        assert!(legs(&one, &metric, 2.0).is_empty());
    }

    #[test]
    fn test_heading_serializes_lowercase() {
        let json = serde_json::to_string(&Heading::North).expect("serializable");
        assert_eq!(json, "\"north\"");
    }
}
