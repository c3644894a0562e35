use thiserror::Error;

/// Errors returned by the OpenStreetMap provider clients.
#[derive(Debug, Error)]
pub enum OsmError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered 429.
    #[error("rate limited by {url} (retry after {retry_after_secs}s)")]
    RateLimited { url: String, retry_after_secs: u64 },

    /// Any other non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// An Overpass response without an `elements` array.
    #[error("response from {url} has no elements array")]
    MissingElements { url: String },

    /// A geocoder match whose coordinates do not parse or are out of range.
    #[error("invalid coordinate in geocoder response: lat={lat:?} lon={lon:?}")]
    InvalidCoordinate { lat: String, lon: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
