//! Normalization of Overpass elements into [`Place`] records.

use moodmap_core::{Coordinates, Place};

use crate::simulated::MetadataSimulator;
use crate::types::OverpassElement;

/// Vicinity shown when an element carries no street address.
pub const VICINITY_FALLBACK: &str = "Nearby";

/// Type shown when an element carries none of the category tags.
pub const TYPE_FALLBACK: &str = "place";

/// Category tags consulted, in order, for a place's type.
const CATEGORY_TAGS: [&str; 4] = ["amenity", "leisure", "shop", "office"];

/// Derives a display rating in `[3.5, 4.9]` from an element id.
///
/// The last three decimal digits of `id` (or 500 when it has none) are
/// reduced modulo 15 and added to 3.5 in tenths, so the same id always
/// rates the same.
#[must_use]
pub fn rating_for_id(id: &str) -> String {
    let digits: Vec<char> = id.chars().filter(char::is_ascii_digit).collect();
    let tail: String = digits[digits.len().saturating_sub(3)..].iter().collect();
    let seed = tail.parse::<u32>().unwrap_or(500);
    let tenths = 35 + seed % 15;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// `"<housenumber> <street>"` when `addr:street` is present, else
/// [`VICINITY_FALLBACK`].
#[must_use]
pub fn vicinity(element: &OverpassElement) -> String {
    match element.tag("addr:street") {
        Some(street) => {
            let number = element.tag("addr:housenumber").unwrap_or_default();
            format!("{number} {street}").trim().to_string()
        }
        None => VICINITY_FALLBACK.to_string(),
    }
}

#[must_use]
pub fn place_type(element: &OverpassElement) -> String {
    CATEGORY_TAGS
        .iter()
        .find_map(|key| element.tag(key))
        .unwrap_or(TYPE_FALLBACK)
        .to_string()
}

/// Converts one element into a [`Place`].
///
/// Returns `None` for elements with no tags, a missing or blank `name`, no
/// id, or no valid coordinates.
#[must_use]
pub fn normalize_element(
    element: &OverpassElement,
    simulator: &dyn MetadataSimulator,
) -> Option<Place> {
    let name = element.tag("name").filter(|n| !n.trim().is_empty())?;
    let id = element.id?.to_string();
    let location = match (element.lat, element.lon) {
        (Some(lat), Some(lng)) => Coordinates::new(lat, lng).ok()?,
        _ => return None,
    };
    let meta = simulator.simulate();

    Some(Place {
        rating: rating_for_id(&id),
        id,
        name: name.to_string(),
        user_ratings_total: meta.user_ratings_total,
        vicinity: vicinity(element),
        location,
        open_now: meta.open_now,
        types: vec![place_type(element)],
        price_level: meta.price_level,
    })
}

/// Normalizes `elements` in provider order, dropping the ones
/// [`normalize_element`] rejects. No sorting and no de-duplication.
#[must_use]
pub fn normalize_elements(
    elements: &[OverpassElement],
    simulator: &dyn MetadataSimulator,
) -> Vec<Place> {
    let places: Vec<Place> = elements
        .iter()
        .filter_map(|el| normalize_element(el, simulator))
        .collect();
    let dropped = elements.len() - places.len();
    if dropped > 0 {
        tracing::debug!(
            kept = places.len(),
            dropped,
            "dropped unnamed or unlocated elements"
        );
    }
    places
}
