use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Optional YAML override for the built-in matching lexicon.
    pub lexicon_path: Option<PathBuf>,
    pub usgs_base_url: String,
    pub nominatim_base_url: String,
    pub geonames_base_url: String,
    /// `GeoNames` account name. The secondary geocoder is skipped when unset.
    pub geonames_username: Option<String>,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub default_radius_km: f64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("lexicon_path", &self.lexicon_path)
            .field("usgs_base_url", &self.usgs_base_url)
            .field("nominatim_base_url", &self.nominatim_base_url)
            .field("geonames_base_url", &self.geonames_base_url)
            .field(
                "geonames_username",
                &self.geonames_username.as_ref().map(|_| "[redacted]"),
            )
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("default_radius_km", &self.default_radius_km)
            .finish()
    }
}
