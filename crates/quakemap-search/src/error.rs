use thiserror::Error;

/// Errors that abort a search.
///
/// An empty match list is not an error; callers receive an `Ok` result with
/// `total_found == 0`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was empty or whitespace only. Raised before any network call.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Radius must be finite and non-negative. Raised before any network call.
    #[error("invalid radius: {0} km")]
    InvalidRadius(f64),

    /// The earthquake feed could not be fetched or decoded.
    #[error("earthquake feed unavailable: {0}")]
    Feed(#[from] quakemap_usgs::FeedError),

    #[error("geocoder setup failed: {0}")]
    Geocoder(#[from] quakemap_geocode::GeocodeError),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}
