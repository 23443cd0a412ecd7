//! Location and coordinate types.

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use route_planner::models::Coordinates;
///
/// let monas = Coordinates::new(-6.175, 106.827);
/// assert!(monas.is_valid());
/// assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, valid range `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, valid range `[-180, 180]`.
    pub lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair. No validation is performed.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both values are finite and within
    /// `[-90, 90]` / `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A named stop that can be placed on a route.
///
/// The `id` is opaque to the planner; whichever collaborator creates the
/// location assigns it. Only `coordinates` take part in route computation.
///
/// # Examples
///
/// ```
/// use route_planner::models::{Coordinates, Location};
///
/// let loc = Location::new("1", "Warehouse", Coordinates::new(-6.2088, 106.8456))
///     .with_address("Jakarta Pusat");
/// assert_eq!(loc.id(), "1");
/// assert_eq!(loc.address(), Some("Jakarta Pusat"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    coordinates: Coordinates,
}

impl Location {
    /// Creates a location without an address.
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            coordinates,
        }
    }

    /// Sets a free-text address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional address.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Geographic position.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

/// A location that has not been assigned an ID yet.
///
/// Handed to [`LocationStore::add`](crate::session::LocationStore::add), which
/// assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    /// Display label.
    pub name: String,
    /// Optional free-text address.
    #[serde(default)]
    pub address: Option<String>,
    /// Geographic position.
    pub coordinates: Coordinates,
}

impl NewLocation {
    /// Creates a new location draft.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            address: None,
            coordinates,
        }
    }

    /// Sets a free-text address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub(crate) fn into_location(self, id: String) -> Location {
        Location {
            id,
            name: self.name,
            address: self.address,
            coordinates: self.coordinates,
        }
    }
}
