//! Route calculation state machine.
//!
//! ```text
//! Idle ──begin──▶ Calculating ──finish(Ok)──▶ Ready
//!   ▲                  │       ──finish(Err)─▶ Failed
//!   └── clear / location change ◀─────────────┘
//! ```
//!
//! Every location change and every new calculation bumps a generation
//! counter. An outcome is only applied if its request carries the current
//! generation, so results computed from a superseded snapshot are dropped.

use log::debug;
use serde::{Deserialize, Serialize};

use super::LocationStore;
use crate::error::{Result, RouteError};
use crate::models::{Location, NewLocation, RouteResult};
use crate::optimizer::RouteOptimizer;

/// Externally visible phase of a [`RouteSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    /// No route computed for the current locations.
    Idle,
    /// A calculation request is outstanding.
    Calculating,
    /// A route is available.
    Ready,
    /// The last calculation failed.
    Failed,
}

#[derive(Debug, Clone)]
enum RouteState {
    Idle,
    Calculating,
    Ready(RouteResult),
    Failed(RouteError),
}

/// A snapshot of the inputs of one calculation.
///
/// Owns copies of the locations, so it can be run on another thread while
/// the session keeps accepting edits.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    generation: u64,
    locations: Vec<Location>,
    start_hint: Option<String>,
}

impl CalculationRequest {
    /// Generation this request was issued under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Locations captured at request time.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Preferred first stop.
    pub fn start_hint(&self) -> Option<&str> {
        self.start_hint.as_deref()
    }

    /// Runs the route computation. Pure; does not touch the session.
    pub fn run(&self, optimizer: &RouteOptimizer) -> Result<RouteResult> {
        optimizer.compute_route(&self.locations, self.start_hint())
    }
}

/// Location set plus the lifecycle of the route computed from it.
///
/// The selected location, if any, is used as the start of the route.
///
/// # Examples
///
/// ```
/// use route_planner::optimizer::RouteOptimizer;
/// use route_planner::session::{LocationStore, RouteSession, RouteStatus};
///
/// let mut session = RouteSession::new(LocationStore::with_demo_locations(), RouteOptimizer::default());
/// session.select_location("3");
/// let result = session.calculate().unwrap();
/// assert_eq!(result.optimized_order()[0], "3");
/// assert_eq!(session.status(), RouteStatus::Ready);
///
/// session.clear();
/// assert_eq!(session.status(), RouteStatus::Idle);
/// ```
#[derive(Debug, Clone)]
pub struct RouteSession {
    store: LocationStore,
    optimizer: RouteOptimizer,
    state: RouteState,
    generation: u64,
}

impl RouteSession {
    /// Creates an idle session over `store`.
    pub fn new(store: LocationStore, optimizer: RouteOptimizer) -> Self {
        Self {
            store,
            optimizer,
            state: RouteState::Idle,
            generation: 0,
        }
    }

    /// Read access to the locations.
    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    /// Optimizer used for calculations.
    pub fn optimizer(&self) -> &RouteOptimizer {
        &self.optimizer
    }

    /// Current phase of the session.
    pub fn status(&self) -> RouteStatus {
        match self.state {
            RouteState::Idle => RouteStatus::Idle,
            RouteState::Calculating => RouteStatus::Calculating,
            RouteState::Ready(_) => RouteStatus::Ready,
            RouteState::Failed(_) => RouteStatus::Failed,
        }
    }

    /// The route computed from the current locations, if any.
    pub fn current_result(&self) -> Option<&RouteResult> {
        match &self.state {
            RouteState::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// Why the last calculation failed, while in the `Failed` state.
    pub fn last_error(&self) -> Option<&RouteError> {
        match &self.state {
            RouteState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Adds a location and discards any computed route.
    pub fn add_location(&mut self, location: NewLocation) -> String {
        let id = self.store.add(location);
        self.invalidate();
        id
    }

    /// Adds a location with a caller-assigned ID and discards any computed
    /// route.
    pub fn insert_location(&mut self, location: Location) -> Result<()> {
        self.store.insert(location)?;
        self.invalidate();
        Ok(())
    }

    /// Removes a location and discards any computed route.
    pub fn remove_location(&mut self, id: &str) -> Option<Location> {
        let removed = self.store.remove(id)?;
        self.invalidate();
        Some(removed)
    }

    /// Selects the preferred start location. Returns `false` for unknown IDs.
    pub fn select_location(&mut self, id: &str) -> bool {
        self.store.select(id)
    }

    /// Snapshots the current inputs and enters `Calculating`.
    ///
    /// Any request issued earlier is superseded.
    pub fn begin_calculation(&mut self) -> CalculationRequest {
        self.generation += 1;
        self.state = RouteState::Calculating;
        CalculationRequest {
            generation: self.generation,
            locations: self.store.list().to_vec(),
            start_hint: self.store.selected().map(|l| l.id().to_string()),
        }
    }

    /// Applies the outcome of a request issued by
    /// [`begin_calculation`](Self::begin_calculation).
    ///
    /// Returns `false` and drops the outcome if the request was superseded
    /// by a later calculation, a location change or a clear.
    pub fn finish_calculation(&mut self, generation: u64, outcome: Result<RouteResult>) -> bool {
        if generation != self.generation || !matches!(self.state, RouteState::Calculating) {
            debug!(
                "Discarding route outcome from generation {generation} (current {})",
                self.generation
            );
            return false;
        }
        self.state = match outcome {
            Ok(result) => RouteState::Ready(result),
            Err(err) => RouteState::Failed(err),
        };
        true
    }

    /// Computes the route synchronously and stores the outcome.
    pub fn calculate(&mut self) -> Result<&RouteResult> {
        let request = self.begin_calculation();
        let outcome = request.run(&self.optimizer);
        self.finish_calculation(request.generation(), outcome);
        match &self.state {
            RouteState::Ready(result) => Ok(result),
            RouteState::Failed(err) => Err(err.clone()),
            RouteState::Idle | RouteState::Calculating => {
                unreachable!("finish_calculation settles the current generation")
            }
        }
    }

    /// Drops the computed route and the selection.
    pub fn clear(&mut self) {
        self.store.clear_selection();
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.state = RouteState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn session_with(points: &[(f64, f64)]) -> RouteSession {
        let mut store = LocationStore::new();
        for (i, &(lat, lng)) in points.iter().enumerate() {
            store.add(NewLocation::new(format!("stop {i}"), Coordinates::new(lat, lng)));
        }
        RouteSession::new(store, RouteOptimizer::default())
    }

    #[test]
    fn test_starts_idle() {
        let session = session_with(&[(0.0, 0.0), (0.0, 1.0)]);
        assert_eq!(session.status(), RouteStatus::Idle);
        assert!(session.current_result().is_none());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_calculate_ready() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 2.0), (0.0, 1.0)]);
        let order = session.calculate().expect("valid").optimized_order().to_vec();
        assert_eq!(order, vec!["1", "3", "2"]);
        assert_eq!(session.status(), RouteStatus::Ready);
        assert!(session.current_result().is_some());
    }

    #[test]
    fn test_calculate_failed() {
        let mut session = session_with(&[(0.0, 0.0)]);
        let err = session.calculate().unwrap_err();
        assert_eq!(err, RouteError::insufficient(1));
        assert_eq!(session.status(), RouteStatus::Failed);
        assert_eq!(session.last_error(), Some(&err));
    }

    #[test]
    fn test_location_change_discards_result() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 1.0)]);
        session.calculate().expect("valid");
        session.add_location(NewLocation::new("late", Coordinates::new(1.0, 1.0)));
        assert_eq!(session.status(), RouteStatus::Idle);
        assert!(session.current_result().is_none());

        session.calculate().expect("valid");
        session.remove_location("1");
        assert!(session.current_result().is_none());
    }

    #[test]
    fn test_remove_unknown_keeps_result() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 1.0)]);
        session.calculate().expect("valid");
        assert!(session.remove_location("missing").is_none());
        assert!(session.current_result().is_some());
    }

    #[test]
    fn test_selected_location_starts_route() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);
        assert!(session.select_location("3"));
        let result = session.calculate().expect("valid");
        assert_eq!(result.optimized_order(), &["3", "2", "1"]);
    }

    #[test]
    fn test_clear_resets_selection() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 1.0)]);
        session.select_location("2");
        session.calculate().expect("valid");
        session.clear();
        assert_eq!(session.status(), RouteStatus::Idle);
        assert!(session.store().selected().is_none());
    }

    #[test]
    fn test_stale_outcome_discarded_after_edit() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 1.0)]);
        let request = session.begin_calculation();
        assert_eq!(session.status(), RouteStatus::Calculating);

        session.add_location(NewLocation::new("edit", Coordinates::new(2.0, 2.0)));
        let outcome = request.run(session.optimizer());
        assert!(outcome.is_ok());
        assert!(!session.finish_calculation(request.generation(), outcome));
        assert_eq!(session.status(), RouteStatus::Idle);
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 1.0)]);
        let first = session.begin_calculation();
        let second = session.begin_calculation();

        // both run to completion independently
        let first_outcome = first.run(session.optimizer());
        let second_outcome = second.run(session.optimizer());
        assert_eq!(first_outcome, second_outcome);

        assert!(!session.finish_calculation(first.generation(), first_outcome));
        assert_eq!(session.status(), RouteStatus::Calculating);
        assert!(session.finish_calculation(second.generation(), second_outcome));
        assert_eq!(session.status(), RouteStatus::Ready);
    }

    #[test]
    fn test_request_runs_on_another_thread() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 1.0), (0.0, 3.0)]);
        let request = session.begin_calculation();
        let optimizer = session.optimizer().clone();
        let handle = std::thread::spawn(move || {
            let outcome = request.run(&optimizer);
            (request.generation(), outcome)
        });
        let (generation, outcome) = handle.join().expect("worker finished");
        assert!(session.finish_calculation(generation, outcome));
        assert_eq!(session.current_result().map(|r| r.num_stops()), Some(3));
    }

    #[test]
    fn test_insert_location_duplicate() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 1.0)]);
        session.calculate().expect("valid");
        let err = session
            .insert_location(Location::new("1", "dup", Coordinates::new(5.0, 5.0)))
            .unwrap_err();
        assert!(matches!(err, RouteError::DuplicateIdentifier { .. }));
        // failed insert leaves the route in place
        assert!(session.current_result().is_some());
    }
}
