//! # route-planner
//!
//! Route ordering engine for visit and delivery planning front-ends: orders
//! a set of geographic locations with a greedy nearest-neighbor heuristic
//! and reports distance and travel time estimates.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinates, Location, RouteResult)
//! - [`distance`] — Haversine metric and distance matrix
//! - [`constructive`] — Nearest-neighbor route builder
//! - [`evaluation`] — Route totals, per-leg directions and analytics
//! - [`optimizer`] — Validating entry point and its configuration
//! - [`session`] — Location store and route calculation state machine
//!
//! ## Features
//!
//! - **`wasm`** — wasm-bindgen entry points for browser use
//! - **`ffi`** — JSON-over-C-ABI entry point for native hosts
//!
//! ## Quick Start
//!
//! ```
//! use route_planner::models::{Coordinates, Location};
//! use route_planner::optimizer::RouteOptimizer;
//!
//! let locations = vec![
//!     Location::new("1", "CBD", Coordinates::new(-6.2088, 106.8456)),
//!     Location::new("2", "Senayan", Coordinates::new(-6.2187, 106.8025)),
//!     Location::new("3", "Sudirman", Coordinates::new(-6.2088, 106.8196)),
//! ];
//!
//! let optimizer = RouteOptimizer::default();
//! let result = optimizer.compute_route(&locations, None)?;
//! assert_eq!(result.optimized_order(), &["1", "3", "2"]);
//! # Ok::<(), route_planner::RouteError>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod optimizer;
pub mod session;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, RouteError};
