//! Domain model types for route planning.
//!
//! Locations carry an opaque ID, a display name and WGS84 coordinates; a
//! route result is an ordered snapshot of locations plus its distance and
//! time totals.

mod location;
mod result;

pub use location::{Coordinates, Location, NewLocation};
pub use result::RouteResult;
