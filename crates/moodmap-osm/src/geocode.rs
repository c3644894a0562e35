//! Free-text location search against a Nominatim-compatible geocoder.

use moodmap_core::{AppConfig, Coordinates, Location};
use reqwest::{Client, Url};

use crate::client::{build_http_client, join_url, read_json, ClientSettings};
use crate::error::OsmError;
use crate::retry::retry_with_backoff;
use crate::types::NominatimPlace;

/// Resolves a free-text query to the provider's best-ranked location.
///
/// Use [`LocationResolver::try_resolve`] when the caller needs to tell "no
/// match" apart from a provider failure; [`LocationResolver::resolve`]
/// collapses both to `None`.
pub struct LocationResolver {
    client: Client,
    search_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl LocationResolver {
    /// Creates a resolver for the geocoder rooted at `base_url`
    /// (e.g. `https://nominatim.openstreetmap.org`).
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::Http`] if the HTTP client cannot be constructed or
    /// [`OsmError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, settings: &ClientSettings) -> Result<Self, OsmError> {
        Ok(Self {
            client: build_http_client(settings)?,
            search_url: join_url(base_url, "search")?,
            max_retries: settings.max_retries,
            backoff_base_ms: settings.backoff_base_ms,
        })
    }

    /// # Errors
    ///
    /// See [`LocationResolver::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, OsmError> {
        Self::new(&config.nominatim_url, &ClientSettings::from_config(config))
    }

    /// Resolves `query`, returning `None` for blank input, no match, or any
    /// provider failure. Failures are logged.
    pub async fn resolve(&self, query: &str) -> Option<Location> {
        match self.try_resolve(query).await {
            Ok(Some(location)) => Some(location),
            Ok(None) => {
                tracing::debug!(query, "geocoder returned no match");
                None
            }
            Err(e) => {
                tracing::error!(query, error = %e, "location search failed");
                None
            }
        }
    }

    /// Resolves `query` to the first provider-ranked match.
    ///
    /// Blank queries return `Ok(None)` without touching the network.
    ///
    /// # Errors
    ///
    /// - [`OsmError::Http`], [`OsmError::RateLimited`], or
    ///   [`OsmError::UnexpectedStatus`] on transport or HTTP failure.
    /// - [`OsmError::Deserialize`] if the body is not a list of candidates.
    /// - [`OsmError::InvalidCoordinate`] if the match's coordinates do not
    ///   parse as in-range decimal degrees.
    pub async fn try_resolve(&self, query: &str) -> Result<Option<Location>, OsmError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let url = self.build_search_url(query);
        let body = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let response = self.client.get(url).send().await?;
                read_json(response, "nominatim search").await
            }
        })
        .await?;

        let candidates: Vec<NominatimPlace> =
            serde_json::from_value(body).map_err(|e| OsmError::Deserialize {
                context: format!("nominatim search(q={query})"),
                source: e,
            })?;

        candidates.first().map(to_location).transpose()
    }

    /// Builds the search URL: at most one match, JSON, with address details.
    fn build_search_url(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1")
            .append_pair("addressdetails", "1");
        url
    }
}

/// Maps a geocoder candidate to a [`Location`], refusing to coerce an
/// unparsable coordinate to zero.
fn to_location(place: &NominatimPlace) -> Result<Location, OsmError> {
    let invalid = || OsmError::InvalidCoordinate {
        lat: place.lat.clone(),
        lon: place.lon.clone(),
    };
    let lat = place.lat.trim().parse::<f64>().map_err(|_| invalid())?;
    let lng = place.lon.trim().parse::<f64>().map_err(|_| invalid())?;
    let coordinates = Coordinates::new(lat, lng).map_err(|_| invalid())?;
    Ok(Location::new(coordinates, place.display_name.clone()))
}
