//! Error type shared by all route planning operations.

/// Minimum number of valid locations needed to form a route.
pub const MIN_ROUTE_LOCATIONS: usize = 2;

/// Errors reported by route computation and session management.
///
/// None of these are retried internally; retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// Fewer valid locations than a route needs.
    #[error("at least {required} valid locations are required to compute a route, found {found}")]
    InsufficientLocations {
        /// Valid locations remaining after validation.
        found: usize,
        /// Minimum required.
        required: usize,
    },

    /// A location has non-finite or out-of-range coordinates.
    #[error("location '{id}' has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinate {
        /// Offending location ID.
        id: String,
        /// Latitude as supplied.
        lat: f64,
        /// Longitude as supplied.
        lng: f64,
    },

    /// Two locations share an ID.
    #[error("duplicate location id '{id}'")]
    DuplicateIdentifier {
        /// The repeated ID.
        id: String,
    },

    /// More locations than the configured upper bound.
    #[error("{count} locations exceeds the configured maximum of {max}")]
    TooManyLocations {
        /// Number of locations supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A configuration factor is non-finite or not positive.
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl RouteError {
    pub(crate) fn insufficient(found: usize) -> Self {
        Self::InsufficientLocations {
            found,
            required: MIN_ROUTE_LOCATIONS,
        }
    }
}

/// Result alias for route planning operations.
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_display() {
        let err = RouteError::insufficient(1);
        let msg = err.to_string();
        assert!(msg.contains("at least 2"));
        assert!(msg.contains("found 1"));
    }

    #[test]
    fn test_invalid_coordinate_display() {
        let err = RouteError::InvalidCoordinate {
            id: "depot".to_string(),
            lat: 91.0,
            lng: 10.0,
        };
        assert!(err.to_string().contains("depot"));
        assert!(err.to_string().contains("91"));
    }

    #[test]
    fn test_duplicate_display() {
        let err = RouteError::DuplicateIdentifier {
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate location id '7'");
    }

    #[test]
    fn test_errors_compare() {
        assert_eq!(RouteError::insufficient(0), RouteError::insufficient(0));
        assert_ne!(RouteError::insufficient(0), RouteError::insufficient(1));
    }
}
