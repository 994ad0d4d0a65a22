use thiserror::Error;

/// Errors returned while fetching or decoding an earthquake feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body was not a GeoJSON feature collection.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid feed base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
