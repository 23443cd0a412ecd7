//! Nearest-neighbor constructive heuristic.
//!
//! Builds a single open route greedily: starting from the chosen start
//! location, always move to the nearest location not yet visited.
//!
//! # Determinism
//!
//! The start is the location named by the start hint, or the first input
//! location when the hint is absent or unknown. Distance ties go to the
//! location that appears earliest among those remaining, which preserves
//! input order. No randomness is involved.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use crate::distance::{DistanceMatrix, Haversine};
use crate::models::Location;

/// Returns the nearest-neighbor visiting order as indices into `locations`.
///
/// The returned vector is a permutation of `0..locations.len()`.
///
/// # Examples
///
/// ```
/// use route_planner::constructive::nearest_neighbor_order;
/// use route_planner::distance::Haversine;
/// use route_planner::models::{Coordinates, Location};
///
/// let locations = vec![
///     Location::new("a", "A", Coordinates::new(0.0, 0.0)),
///     Location::new("far", "Far", Coordinates::new(0.0, 3.0)),
///     Location::new("near", "Near", Coordinates::new(0.0, 1.0)),
/// ];
/// let order = nearest_neighbor_order(&locations, None, &Haversine::default());
/// assert_eq!(order, vec![0, 2, 1]);
/// ```
pub fn nearest_neighbor_order(
    locations: &[Location],
    start_hint: Option<&str>,
    metric: &Haversine,
) -> Vec<usize> {
    let n = locations.len();
    if n <= 1 {
        return (0..n).collect();
    }

    let start = start_hint
        .and_then(|hint| locations.iter().position(|l| l.id() == hint))
        .unwrap_or(0);

    let distances = DistanceMatrix::from_locations(locations, metric);
    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;

    while let Some(pos) = distances.nearest_position(current, &remaining) {
        // Vec::remove keeps the remaining order intact for the tie-break
        current = remaining.remove(pos);
        order.push(current);
    }

    order
}

/// Orders `locations` into a route using the nearest-neighbor heuristic.
///
/// Returns a new vector holding clones of the input locations; the input is
/// left untouched.
///
/// # Examples
///
/// ```
/// use route_planner::constructive::build_route;
/// use route_planner::distance::Haversine;
/// use route_planner::models::{Coordinates, Location};
///
/// let locations = vec![
///     Location::new("a", "A", Coordinates::new(0.0, 0.0)),
///     Location::new("b", "B", Coordinates::new(0.0, 2.0)),
///     Location::new("c", "C", Coordinates::new(0.0, 1.0)),
/// ];
/// let route = build_route(&locations, Some("b"), &Haversine::default());
/// let ids: Vec<&str> = route.iter().map(|l| l.id()).collect();
/// assert_eq!(ids, vec!["b", "c", "a"]);
/// ```
pub fn build_route(
    locations: &[Location],
    start_hint: Option<&str>,
    metric: &Haversine,
) -> Vec<Location> {
    nearest_neighbor_order(locations, start_hint, metric)
        .into_iter()
        .map(|i| locations[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn loc(id: &str, lat: f64, lng: f64) -> Location {
        Location::new(id, id.to_uppercase(), Coordinates::new(lat, lng))
    }

    fn ids(route: &[Location]) -> Vec<&str> {
        route.iter().map(|l| l.id()).collect()
    }

    #[test]
    fn test_empty() {
        assert!(build_route(&[], None, &Haversine::default()).is_empty());
    }

    #[test]
    fn test_single_unchanged() {
        let route = build_route(&[loc("a", 1.0, 1.0)], Some("zzz"), &Haversine::default());
        assert_eq!(ids(&route), vec!["a"]);
    }

    #[test]
    fn test_line_visits_in_order() {
        let locations = vec![
            loc("a", 0.0, 0.0),
            loc("c", 0.0, 2.0),
            loc("b", 0.0, 1.0),
            loc("d", 0.0, 3.0),
        ];
        let route = build_route(&locations, None, &Haversine::default());
        assert_eq!(ids(&route), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_start_hint() {
        let locations = vec![loc("a", 0.0, 0.0), loc("b", 0.0, 1.0), loc("c", 0.0, 2.0)];
        let route = build_route(&locations, Some("c"), &Haversine::default());
        assert_eq!(ids(&route), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_unknown_start_hint_falls_back_to_first() {
        let locations = vec![loc("a", 0.0, 0.0), loc("b", 0.0, 1.0)];
        let route = build_route(&locations, Some("missing"), &Haversine::default());
        assert_eq!(ids(&route), vec!["a", "b"]);
    }

    #[test]
    fn test_tie_goes_to_earliest_input() {
        // b and c are equidistant from a
        let locations = vec![loc("a", 0.0, 0.0), loc("b", 0.0, 1.0), loc("c", 0.0, -1.0)];
        let route = build_route(&locations, None, &Haversine::default());
        assert_eq!(ids(&route), vec!["a", "b", "c"]);

        let swapped = vec![loc("a", 0.0, 0.0), loc("c", 0.0, -1.0), loc("b", 0.0, 1.0)];
        let route = build_route(&swapped, None, &Haversine::default());
        assert_eq!(ids(&route), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_coincident_locations_all_placed() {
        let locations: Vec<Location> = (0..5).map(|i| loc(&i.to_string(), 5.0, 5.0)).collect();
        let route = build_route(&locations, None, &Haversine::default());
        assert_eq!(ids(&route), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_coincident_with_start_hint_keeps_input_order() {
        let locations: Vec<Location> = (0..4).map(|i| loc(&i.to_string(), 5.0, 5.0)).collect();
        let route = build_route(&locations, Some("2"), &Haversine::default());
        assert_eq!(ids(&route), vec!["2", "0", "1", "3"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let locations = vec![loc("a", 0.0, 0.0), loc("c", 0.0, 2.0), loc("b", 0.0, 1.0)];
        let before = locations.clone();
        let _ = build_route(&locations, None, &Haversine::default());
        assert_eq!(locations, before);
    }

    #[test]
    fn test_order_is_permutation() {
        let locations = vec![
            loc("a", 1.0, 1.0),
            loc("b", -3.0, 4.0),
            loc("c", 2.0, -2.0),
            loc("d", 1.0, 1.0),
            loc("e", 0.5, 0.0),
        ];
        let mut order = nearest_neighbor_order(&locations, Some("c"), &Haversine::default());
        assert_eq!(order[0], 2);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }
}
