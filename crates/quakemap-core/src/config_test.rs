use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.lexicon_path.is_none());
    assert_eq!(cfg.usgs_base_url, DEFAULT_USGS_BASE_URL);
    assert_eq!(cfg.nominatim_base_url, DEFAULT_NOMINATIM_BASE_URL);
    assert_eq!(cfg.geonames_base_url, DEFAULT_GEONAMES_BASE_URL);
    assert!(cfg.geonames_username.is_none());
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert!((cfg.default_radius_km - 500.0).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("QUAKEMAP_ENV", "production");
    map.insert("QUAKEMAP_BIND_ADDR", "127.0.0.1:8080");
    map.insert("QUAKEMAP_LEXICON_PATH", "/etc/quakemap/lexicon.yaml");
    map.insert("GEONAMES_USERNAME", "quake-edu");
    map.insert("QUAKEMAP_REQUEST_TIMEOUT_SECS", "5");
    map.insert("QUAKEMAP_DEFAULT_RADIUS_KM", "250.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.port(), 8080);
    assert_eq!(
        cfg.lexicon_path.as_deref(),
        Some(std::path::Path::new("/etc/quakemap/lexicon.yaml"))
    );
    assert_eq!(cfg.geonames_username.as_deref(), Some("quake-edu"));
    assert_eq!(cfg.request_timeout_secs, 5);
    assert!((cfg.default_radius_km - 250.5).abs() < f64::EPSILON);
}

#[test]
fn blank_geonames_username_is_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("GEONAMES_USERNAME", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.geonames_username.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("QUAKEMAP_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "QUAKEMAP_BIND_ADDR"),
        "expected InvalidEnvVar(QUAKEMAP_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("QUAKEMAP_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "QUAKEMAP_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(QUAKEMAP_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_negative_radius() {
    let mut map = HashMap::new();
    map.insert("QUAKEMAP_DEFAULT_RADIUS_KM", "-10");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "QUAKEMAP_DEFAULT_RADIUS_KM"),
        "expected InvalidEnvVar(QUAKEMAP_DEFAULT_RADIUS_KM), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_geonames_username() {
    let mut map = HashMap::new();
    map.insert("GEONAMES_USERNAME", "secret-account");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-account"));
    assert!(rendered.contains("[redacted]"));
}
