pub mod app_config;
pub mod config;
pub mod geo;
pub mod lexicon;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{distance_km, is_valid_coordinate, EARTH_RADIUS_KM};
pub use lexicon::{load_lexicon, Abbreviation, CountryClass, Lexicon};
pub use types::{
    EarthquakeRecord, MatchMethod, Resolution, ResolvedLocation, SearchOrigin, SearchResult,
    Timeframe,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read lexicon file {path}: {source}")]
    LexiconFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file: {0}")]
    LexiconFileParse(#[from] serde_yaml::Error),

    #[error("lexicon validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid timeframe: {0} (expected hour, day, week or month)")]
    InvalidTimeframe(String),
}
