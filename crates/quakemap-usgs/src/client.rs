//! HTTP client for the USGS GeoJSON summary feeds.
//!
//! Wraps a shared `reqwest::Client`. Each [`FeedClient::fetch_all`] call is a
//! single GET; transport, status and decode failures are surfaced as
//! [`FeedError`] without any internal retry.

use quakemap_core::{EarthquakeRecord, Timeframe};
use reqwest::{Client, Url};

use crate::error::FeedError;
use crate::normalize::normalize_feature;
use crate::types::FeatureCollection;

const DEFAULT_BASE_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/";

/// Client for the USGS summary feeds.
///
/// Use [`FeedClient::new`] for production or [`FeedClient::with_base_url`] to
/// point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: Url,
}

impl FeedClient {
    /// Creates a client pointed at the public USGS feed.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidBaseUrl`] only if the built-in URL fails to
    /// parse.
    pub fn new(client: Client) -> Result<Self, FeedError> {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom feed root (mirrors or wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(client: Client, base_url: &str) -> Result<Self, FeedError> {
        // Exactly one trailing slash so `Url::join` appends the feed file
        // instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| FeedError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches every event in the given feed window.
    ///
    /// Features lacking a usable position or time are skipped; all others map
    /// one-to-one onto the returned records, in feed order.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] on network failure.
    /// - [`FeedError::UnexpectedStatus`] on a non-2xx response.
    /// - [`FeedError::Deserialize`] if the body is not a feature collection.
    pub async fn fetch_all(
        &self,
        timeframe: Timeframe,
    ) -> Result<Vec<EarthquakeRecord>, FeedError> {
        let url = self.feed_url(timeframe)?;
        tracing::debug!(%url, %timeframe, "fetching earthquake feed");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let collection: FeatureCollection =
            serde_json::from_str(&body).map_err(|e| FeedError::Deserialize {
                context: format!("{timeframe} feed"),
                source: e,
            })?;

        let feature_count = collection.features.len();
        let records: Vec<EarthquakeRecord> = collection
            .features
            .into_iter()
            .filter_map(normalize_feature)
            .collect();

        tracing::debug!(
            %timeframe,
            features = feature_count,
            records = records.len(),
            "normalized earthquake feed"
        );
        Ok(records)
    }

    fn feed_url(&self, timeframe: Timeframe) -> Result<Url, FeedError> {
        self.base_url
            .join(&timeframe.feed_file())
            .map_err(|e| FeedError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> FeedClient {
        FeedClient::with_base_url(Client::new(), base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn feed_url_appends_timeframe_file() {
        let client = test_client("https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary");
        assert_eq!(
            client.feed_url(Timeframe::Week).unwrap().as_str(),
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson"
        );
    }

    #[test]
    fn feed_url_tolerates_trailing_slashes() {
        let client = test_client("http://localhost:9000//");
        assert_eq!(
            client.feed_url(Timeframe::Hour).unwrap().as_str(),
            "http://localhost:9000/all_hour.geojson"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = FeedClient::with_base_url(Client::new(), "not a url");
        assert!(matches!(result, Err(FeedError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn default_client_targets_usgs() {
        let client = FeedClient::new(Client::new()).unwrap();
        assert_eq!(
            client.feed_url(Timeframe::Day).unwrap().as_str(),
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson"
        );
    }
}
