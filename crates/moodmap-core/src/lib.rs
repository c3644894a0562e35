pub mod app_config;
pub mod config;
pub mod location;
pub mod mood;
pub mod place;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use location::{Coordinates, Location, CURRENT_LOCATION_LABEL};
pub use mood::Mood;
pub use place::Place;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("coordinate is not a finite number")]
    NonFiniteCoordinate,

    #[error("unknown mood: {0}")]
    UnknownMood(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
