use serde::{Deserialize, Serialize};

use crate::location::Coordinates;

/// A normalized point of interest ready for display.
///
/// `rating` is derived from `id`; `user_ratings_total`, `open_now` and
/// `price_level` are simulated and carry no provider data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub rating: String,
    pub user_ratings_total: u32,
    pub vicinity: String,
    pub location: Coordinates,
    pub open_now: bool,
    pub types: Vec<String>,
    pub price_level: u8,
}

impl Place {
    /// First entry of `types`, or `"place"` for an empty list.
    #[must_use]
    pub fn primary_type(&self) -> &str {
        self.types.first().map_or("place", String::as_str)
    }
}
