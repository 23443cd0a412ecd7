//! Mutable collection of candidate locations.

use crate::error::{Result, RouteError};
use crate::models::{Coordinates, Location, NewLocation};

/// The candidate locations a user is planning over, plus the current
/// selection.
///
/// Generated IDs come from a monotonic counter, so an ID is never handed out
/// twice even after the location it named is removed.
///
/// # Examples
///
/// ```
/// use route_planner::models::{Coordinates, NewLocation};
/// use route_planner::session::LocationStore;
///
/// let mut store = LocationStore::new();
/// let id = store.add(NewLocation::new("Warehouse", Coordinates::new(-6.2, 106.8)));
/// assert_eq!(store.len(), 1);
/// assert!(store.remove(&id).is_some());
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocationStore {
    locations: Vec<Location>,
    selected: Option<String>,
    next_id: u64,
}

impl LocationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with five business districts in central
    /// Jakarta, IDs `"1"` to `"5"`.
    pub fn with_demo_locations() -> Self {
        let demo = [
            ("Central Business District Jakarta", -6.2088, 106.8456, "Jakarta Pusat, Indonesia"),
            ("Menteng Business Center", -6.1944, 106.8229, "Menteng, Jakarta Pusat"),
            ("Senayan Business Park", -6.2187, 106.8025, "Senayan, Jakarta Pusat"),
            ("Thamrin Corporate Tower", -6.1930, 106.8228, "Thamrin, Jakarta Pusat"),
            ("Sudirman Office Tower", -6.2088, 106.8196, "Sudirman, Jakarta Pusat"),
        ];
        let mut store = Self::new();
        for (name, lat, lng, address) in demo {
            store.add(NewLocation::new(name, Coordinates::new(lat, lng)).with_address(address));
        }
        store
    }

    /// Adds a location, assigning it a fresh ID which is returned.
    pub fn add(&mut self, location: NewLocation) -> String {
        let id = self.fresh_id();
        self.locations.push(location.into_location(id.clone()));
        id
    }

    /// Adds a location whose ID was assigned elsewhere.
    ///
    /// # Errors
    ///
    /// [`RouteError::DuplicateIdentifier`] if the ID is already present.
    pub fn insert(&mut self, location: Location) -> Result<()> {
        if self.get(location.id()).is_some() {
            return Err(RouteError::DuplicateIdentifier {
                id: location.id().to_string(),
            });
        }
        // keep generated IDs clear of numeric IDs assigned elsewhere
        if let Ok(n) = location.id().parse::<u64>() {
            self.next_id = self.next_id.max(n);
        }
        self.locations.push(location);
        Ok(())
    }

    /// Removes a location by ID, clearing the selection if it pointed there.
    pub fn remove(&mut self, id: &str) -> Option<Location> {
        let pos = self.locations.iter().position(|l| l.id() == id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(self.locations.remove(pos))
    }

    /// Looks up a location by ID.
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id() == id)
    }

    /// All locations in insertion order.
    pub fn list(&self) -> &[Location] {
        &self.locations
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the store holds no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Marks a location as selected. Returns `false` for unknown IDs.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Currently selected location, if any.
    pub fn selected(&self) -> Option<&Location> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Drops the selection, if any.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn fresh_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}
