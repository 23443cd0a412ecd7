//! Route evaluation: totals, per-leg directions and analytics.

mod analytics;
mod directions;
mod summary;

pub use analytics::RouteAnalytics;
pub use directions::{legs, Heading, Leg};
pub use summary::{route_distance, summarize, RouteSummary, DEFAULT_MINUTES_PER_KM};
