//! Geographic points: raw coordinates and labelled search centres.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Label given to a location that came from the device rather than a search.
pub const CURRENT_LOCATION_LABEL: &str = "Current Location";

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Builds a coordinate pair, rejecting non-finite and out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NonFiniteCoordinate`] for `NaN`/infinite input and
    /// [`CoreError::LatitudeOutOfRange`] / [`CoreError::LongitudeOutOfRange`]
    /// when a value falls outside the WGS84 range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoreError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoreError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }
}

/// A resolved search centre with a human-readable label.
///
/// Produced by the geocoder or from device coordinates and never mutated;
/// the caller replaces it wholesale when the user picks somewhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
}

impl Location {
    #[must_use]
    pub fn new(coordinates: Coordinates, display_name: impl Into<String>) -> Self {
        Self {
            lat: coordinates.lat,
            lng: coordinates.lng,
            display_name: display_name.into(),
        }
    }

    /// A location reported by the device, labelled [`CURRENT_LOCATION_LABEL`].
    #[must_use]
    pub fn current(coordinates: Coordinates) -> Self {
        Self::new(coordinates, CURRENT_LOCATION_LABEL)
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}
