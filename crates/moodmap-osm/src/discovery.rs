//! Mood-driven point-of-interest discovery against an Overpass interpreter.

use std::sync::Arc;

use moodmap_core::{AppConfig, Coordinates, Mood, Place};
use reqwest::{Client, Url};

use crate::client::{build_http_client, parse_url, read_json, ClientSettings};
use crate::error::OsmError;
use crate::normalize::normalize_elements;
use crate::query::{MoodTemplate, OverpassQuery, QueryOptions};
use crate::retry::retry_with_backoff;
use crate::simulated::{MetadataSimulator, RandomMetadata};
use crate::types::OverpassElement;

/// Finds places around a centre that suit a mood.
///
/// Every call issues a fresh request; nothing is cached between calls.
pub struct PlaceDiscovery {
    client: Client,
    interpreter_url: Url,
    options: QueryOptions,
    max_retries: u32,
    backoff_base_ms: u64,
    simulator: Arc<dyn MetadataSimulator>,
}

impl PlaceDiscovery {
    /// Creates a client posting to `interpreter_url`
    /// (e.g. `https://overpass-api.de/api/interpreter`).
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::Http`] if the HTTP client cannot be constructed or
    /// [`OsmError::InvalidBaseUrl`] if `interpreter_url` does not parse.
    pub fn new(
        interpreter_url: &str,
        settings: &ClientSettings,
        options: QueryOptions,
    ) -> Result<Self, OsmError> {
        Ok(Self {
            client: build_http_client(settings)?,
            interpreter_url: parse_url(interpreter_url)?,
            options,
            max_retries: settings.max_retries,
            backoff_base_ms: settings.backoff_base_ms,
            simulator: Arc::new(RandomMetadata),
        })
    }

    /// # Errors
    ///
    /// See [`PlaceDiscovery::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, OsmError> {
        Self::new(
            &config.overpass_url,
            &ClientSettings::from_config(config),
            QueryOptions::from_config(config),
        )
    }

    /// Replaces the source of simulated metadata.
    #[must_use]
    pub fn with_simulator(mut self, simulator: impl MetadataSimulator + 'static) -> Self {
        self.simulator = Arc::new(simulator);
        self
    }

    /// Builds the query that [`PlaceDiscovery::try_discover`] would send.
    #[must_use]
    pub fn build_query(&self, mood: Mood, center: Coordinates) -> OverpassQuery {
        OverpassQuery::new(MoodTemplate::for_mood(mood), center, self.options)
    }

    /// Discovers places, returning an empty list when no mood is selected or
    /// on any provider failure. Failures are logged.
    pub async fn discover(&self, mood: Option<Mood>, center: Coordinates) -> Vec<Place> {
        match self.try_discover(mood, center).await {
            Ok(places) => places,
            Err(e) => {
                tracing::error!(
                    mood = mood.map_or("none", Mood::key),
                    error = %e,
                    "place discovery failed, returning no places"
                );
                Vec::new()
            }
        }
    }

    /// Discovers places for `mood` around `center`, in provider order.
    ///
    /// `None` returns an empty list without touching the network.
    ///
    /// # Errors
    ///
    /// - [`OsmError::Http`], [`OsmError::RateLimited`], or
    ///   [`OsmError::UnexpectedStatus`] on transport or HTTP failure.
    /// - [`OsmError::Deserialize`] if the body is not JSON.
    /// - [`OsmError::MissingElements`] if the body has no `elements` array.
    pub async fn try_discover(
        &self,
        mood: Option<Mood>,
        center: Coordinates,
    ) -> Result<Vec<Place>, OsmError> {
        let Some(mood) = mood else {
            return Ok(Vec::new());
        };

        let query = self.build_query(mood, center).render();
        tracing::debug!(%mood, lat = center.lat, lng = center.lng, "querying overpass");

        let body = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let query = query.clone();
            async move {
                let response = self
                    .client
                    .post(self.interpreter_url.clone())
                    .header(
                        reqwest::header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(query)
                    .send()
                    .await?;
                read_json(response, "overpass interpreter").await
            }
        })
        .await?;

        let elements = self.parse_elements(body)?;
        let places = normalize_elements(&elements, self.simulator.as_ref());
        tracing::info!(
            %mood,
            elements = elements.len(),
            places = places.len(),
            "place discovery complete"
        );
        Ok(places)
    }

    /// Extracts the `elements` array, skipping individual entries that do not
    /// deserialize rather than failing the whole response.
    fn parse_elements(&self, body: serde_json::Value) -> Result<Vec<OverpassElement>, OsmError> {
        let serde_json::Value::Object(mut map) = body else {
            return Err(self.missing_elements());
        };
        let Some(serde_json::Value::Array(raw)) = map.remove("elements") else {
            return Err(self.missing_elements());
        };

        Ok(raw
            .into_iter()
            .enumerate()
            .filter_map(|(idx, v)| {
                serde_json::from_value::<OverpassElement>(v)
                    .map_err(|e| {
                        tracing::warn!(idx, error = %e, "skipping malformed overpass element");
                    })
                    .ok()
            })
            .collect())
    }

    fn missing_elements(&self) -> OsmError {
        OsmError::MissingElements {
            url: self.interpreter_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discovery() -> PlaceDiscovery {
        PlaceDiscovery::new(
            "https://overpass-api.de/api/interpreter",
            &ClientSettings::default(),
            QueryOptions::default(),
        )
        .expect("client construction should not fail")
    }

    #[test]
    fn new_rejects_invalid_url() {
        let result = PlaceDiscovery::new(
            "not a url",
            &ClientSettings::default(),
            QueryOptions::default(),
        );
        assert!(matches!(result, Err(OsmError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn build_query_uses_configured_options() {
        let discovery = PlaceDiscovery::new(
            "https://overpass-api.de/api/interpreter",
            &ClientSettings::default(),
            QueryOptions {
                radius_m: 750,
                result_limit: 8,
                timeout_secs: 15,
            },
        )
        .unwrap();
        let query = discovery
            .build_query(Mood::QuickBite, Coordinates::new(40.0, -74.0).unwrap())
            .render();
        assert!(query.contains("[timeout:15]"));
        assert!(query.contains("out body 8;"));
        assert!(query.contains("node[\"shop\"=\"bakery\"](around:750,40,-74);"));
    }

    #[test]
    fn parse_elements_rejects_missing_array() {
        let d = discovery();
        assert!(matches!(
            d.parse_elements(serde_json::json!({ "remark": "runtime error" })),
            Err(OsmError::MissingElements { .. })
        ));
        assert!(matches!(
            d.parse_elements(serde_json::json!({ "elements": "nope" })),
            Err(OsmError::MissingElements { .. })
        ));
        assert!(matches!(
            d.parse_elements(serde_json::json!([])),
            Err(OsmError::MissingElements { .. })
        ));
    }

    #[test]
    fn parse_elements_skips_malformed_entries() {
        let d = discovery();
        let elements = d
            .parse_elements(serde_json::json!({
                "elements": [
                    { "id": 1, "lat": 1.0, "lon": 2.0 },
                    { "id": "not-a-number" },
                    { "id": 3, "tags": { "name": "X" } }
                ]
            }))
            .unwrap();
        let ids: Vec<_> = elements.iter().map(|e| e.id).collect();
        assert_eq!(ids, [Some(1_i64), Some(3)]);
    }
}
