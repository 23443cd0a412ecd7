//! In-process planning state.
//!
//! - [`LocationStore`]: the mutable candidate location list and selection
//! - [`RouteSession`]: the `Idle → Calculating → Ready/Failed` lifecycle of
//!   the route computed from that list

mod state;
mod store;

pub use state::{CalculationRequest, RouteSession, RouteStatus};
pub use store::LocationStore;
