//! Shared HTTP plumbing for the Nominatim and Overpass clients.
//!
//! Both clients use a `reqwest::Client` with an explicit client-side timeout
//! and `User-Agent` (the public OSM services reject anonymous traffic), and
//! map non-2xx statuses onto typed [`OsmError`] variants.

use std::time::Duration;

use moodmap_core::AppConfig;
use reqwest::{Client, Response, StatusCode, Url};

use crate::error::OsmError;

/// Transport settings shared by every provider client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after the first failure for retriable errors.
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl ClientSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "moodmap/0.1 (place-discovery)".to_string(),
            max_retries: 2,
            backoff_base_ms: 500,
        }
    }
}

pub(crate) fn build_http_client(settings: &ClientSettings) -> Result<Client, OsmError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(settings.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Parses `raw` as an absolute URL.
pub(crate) fn parse_url(raw: &str) -> Result<Url, OsmError> {
    Url::parse(raw).map_err(|e| OsmError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Parses `base` and appends `segment` as its final path component.
///
/// The base is normalised to end with exactly one slash first so that
/// `Url::join` appends rather than replacing the last segment.
pub(crate) fn join_url(base: &str, segment: &str) -> Result<Url, OsmError> {
    let normalised = format!("{}/", base.trim_end_matches('/'));
    parse_url(&normalised)?
        .join(segment)
        .map_err(|e| OsmError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })
}

/// Checks the status of `response` and parses its body as JSON.
///
/// # Errors
///
/// - [`OsmError::RateLimited`] on 429, honouring `Retry-After` when numeric.
/// - [`OsmError::UnexpectedStatus`] on any other non-2xx status.
/// - [`OsmError::Http`] if the body cannot be read.
/// - [`OsmError::Deserialize`] if the body is not valid JSON.
pub(crate) async fn read_json(
    response: Response,
    context: &str,
) -> Result<serde_json::Value, OsmError> {
    let status = response.status();
    let url = response.url().to_string();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);
        return Err(OsmError::RateLimited {
            url,
            retry_after_secs,
        });
    }

    if !status.is_success() {
        return Err(OsmError::UnexpectedStatus {
            status: status.as_u16(),
            url,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| OsmError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
