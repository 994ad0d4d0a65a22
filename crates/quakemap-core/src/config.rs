use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_USGS_BASE_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/";
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org/";
pub const DEFAULT_GEONAMES_BASE_URL: &str = "http://api.geonames.org/";
pub const DEFAULT_USER_AGENT: &str = "quakemap/0.1 (earthquake-education)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
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
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("QUAKEMAP_BIND_ADDR", "0.0.0.0:5000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("QUAKEMAP_BIND_ADDR", e.to_string()))?;

    let request_timeout_secs = or_default("QUAKEMAP_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("QUAKEMAP_REQUEST_TIMEOUT_SECS", e.to_string()))?;

    let default_radius_km = or_default("QUAKEMAP_DEFAULT_RADIUS_KM", "500")
        .parse::<f64>()
        .map_err(|e| invalid("QUAKEMAP_DEFAULT_RADIUS_KM", e.to_string()))?;
    if !default_radius_km.is_finite() || default_radius_km < 0.0 {
        return Err(invalid(
            "QUAKEMAP_DEFAULT_RADIUS_KM",
            format!("radius must be a non-negative number, got {default_radius_km}"),
        ));
    }

    Ok(AppConfig {
        env: parse_environment(&or_default("QUAKEMAP_ENV", "development")),
        bind_addr,
        log_level: or_default("QUAKEMAP_LOG_LEVEL", "info"),
        lexicon_path: optional("QUAKEMAP_LEXICON_PATH").map(PathBuf::from),
        usgs_base_url: or_default("QUAKEMAP_USGS_BASE_URL", DEFAULT_USGS_BASE_URL),
        nominatim_base_url: or_default("QUAKEMAP_NOMINATIM_BASE_URL", DEFAULT_NOMINATIM_BASE_URL),
        geonames_base_url: or_default("QUAKEMAP_GEONAMES_BASE_URL", DEFAULT_GEONAMES_BASE_URL),
        geonames_username: optional("GEONAMES_USERNAME"),
        user_agent: or_default("QUAKEMAP_USER_AGENT", DEFAULT_USER_AGENT),
        request_timeout_secs,
        default_radius_km,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
