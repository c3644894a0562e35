//! OpenStreetMap provider response types.
//!
//! Models the JSON returned by a Nominatim `search` call and by the Overpass
//! interpreter. Fields the pipeline does not read are left undeclared and
//! ignored by serde.

use std::collections::HashMap;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Nominatim
// ---------------------------------------------------------------------------

/// One candidate from a Nominatim `search` response.
///
/// Nominatim returns coordinates as decimal strings.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

// ---------------------------------------------------------------------------
// Overpass
// ---------------------------------------------------------------------------

/// A single element of an Overpass `[out:json]` response.
///
/// Every field is optional: skeleton output (`out skel`) carries no tags, and
/// ways/relations carry no coordinates of their own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassElement {
    #[serde(default, rename = "type")]
    pub element_type: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

impl OverpassElement {
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .as_ref()
            .and_then(|t| t.get(key))
            .map(String::as_str)
    }
}
