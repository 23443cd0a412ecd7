//! Distance computation.
//!
//! Provides the haversine great-circle metric and a dense distance matrix
//! built from it.

mod haversine;
mod matrix;

pub use haversine::{haversine_distance, Haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
