use crate::app_config::AppConfig;
use crate::location::{Coordinates, Location};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("MOODMAP_LOG_LEVEL", "info");

    let nominatim_url = or_default(
        "MOODMAP_NOMINATIM_URL",
        "https://nominatim.openstreetmap.org",
    );
    let overpass_url = or_default(
        "MOODMAP_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let user_agent = or_default("MOODMAP_USER_AGENT", "moodmap/0.1 (place-discovery)");

    let request_timeout_secs = parse_u64("MOODMAP_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "MOODMAP_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }
    let max_retries = parse_u32("MOODMAP_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("MOODMAP_RETRY_BACKOFF_BASE_MS", "500")?;

    let search_radius_m = parse_u32("MOODMAP_SEARCH_RADIUS_M", "2000")?;
    let result_limit = parse_u32("MOODMAP_RESULT_LIMIT", "20")?;
    let query_timeout_secs = parse_u32("MOODMAP_QUERY_TIMEOUT_SECS", "25")?;

    let default_lat = parse_f64("MOODMAP_DEFAULT_LAT", "37.7749")?;
    let default_lng = parse_f64("MOODMAP_DEFAULT_LNG", "-122.4194")?;
    let default_center = Coordinates::new(default_lat, default_lng)
        .map_err(|e| invalid("MOODMAP_DEFAULT_LAT/MOODMAP_DEFAULT_LNG", e.to_string()))?;
    let default_name = or_default("MOODMAP_DEFAULT_LOCATION_NAME", "San Francisco, CA");

    Ok(AppConfig {
        log_level,
        nominatim_url,
        overpass_url,
        user_agent,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        search_radius_m,
        result_limit,
        query_timeout_secs,
        default_location: Location::new(default_center, default_name),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
