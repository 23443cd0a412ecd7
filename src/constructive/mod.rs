//! Constructive heuristics for ordering locations into a route.
//!
//! - [`nearest_neighbor_order`] / [`build_route`]: greedy nearest neighbor, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{build_route, nearest_neighbor_order};
