use thiserror::Error;

/// Failures from a single geocoding provider.
///
/// These never escape [`crate::PlaceResolver`]; they are logged and the next
/// provider is tried.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The provider reported an application-level error in a 2xx body.
    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned unusable coordinates ({lat}, {lon})")]
    InvalidCoordinates {
        provider: &'static str,
        lat: String,
        lon: String,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
