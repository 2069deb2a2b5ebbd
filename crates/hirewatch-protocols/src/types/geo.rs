//! Search coordinate produced by the geocoder and persisted in the geo-cache.

use serde::{Deserialize, Serialize};

/// Distance unit sent with every geo query.
pub const DEFAULT_DISTANCE_UNIT: &str = "mi";

/// Search radius around the coordinate, in [`DEFAULT_DISTANCE_UNIT`].
pub const DEFAULT_SEARCH_RADIUS: u32 = 30;

/// A point plus search radius.
///
/// Serialized exactly as the upstream `geoQueryClause` expects, so the
/// cached file can be sent back without transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
    pub unit: String,
    pub distance: u32,
}

impl GeoCoordinate {
    /// Create a coordinate with the default unit and radius.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            unit: DEFAULT_DISTANCE_UNIT.to_string(),
            distance: DEFAULT_SEARCH_RADIUS,
        }
    }

    /// Override unit and radius.
    pub fn with_radius(mut self, unit: impl Into<String>, distance: u32) -> Self {
        self.unit = unit.into();
        self.distance = distance;
        self
    }
}

#[cfg(test)]
#[path = "geo_tests.rs"]
mod tests;
