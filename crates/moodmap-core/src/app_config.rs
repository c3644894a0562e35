use crate::location::Location;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Base URL of the Nominatim-compatible geocoding service.
    pub nominatim_url: String,
    /// Full URL of the Overpass interpreter endpoint.
    pub overpass_url: String,
    pub user_agent: String,
    /// Client-side timeout applied to every outbound request.
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    /// Radius, in metres, of the `around` filter in discovery queries.
    pub search_radius_m: u32,
    /// Cap on primary elements returned by a discovery query.
    pub result_limit: u32,
    /// Server-side timeout hint embedded in discovery queries.
    pub query_timeout_secs: u32,
    /// Search centre used before the user has picked a location.
    pub default_location: Location,
}
