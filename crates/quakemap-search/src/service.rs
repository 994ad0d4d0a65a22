//! Search orchestration: geocode, fetch, then walk the match strategies.

use std::sync::Arc;
use std::time::Duration;

use quakemap_core::{
    AppConfig, EarthquakeRecord, Lexicon, MatchMethod, Resolution, SearchOrigin, SearchResult,
    Timeframe,
};
use quakemap_geocode::{GeoNamesClient, NominatimClient, PlaceResolver};
use quakemap_usgs::FeedClient;

use crate::error::SearchError;
use crate::matcher::{match_country, match_partial, match_place_name, match_radius};

pub const DEFAULT_RADIUS_KM: f64 = 500.0;

/// Records shown by a country search when the caller gives no limit.
pub const DEFAULT_COUNTRY_LIMIT: usize = 50;

/// Entry point for every search. Cheap to clone; holds no per-request state.
#[derive(Debug, Clone)]
pub struct SearchService {
    feed: FeedClient,
    resolver: PlaceResolver,
    lexicon: Arc<Lexicon>,
}

impl SearchService {
    #[must_use]
    pub fn new(feed: FeedClient, resolver: PlaceResolver, lexicon: Lexicon) -> Self {
        Self {
            feed,
            resolver,
            lexicon: Arc::new(lexicon),
        }
    }

    /// Wires the USGS feed and both geocoders onto one shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::HttpClient`] if the `reqwest::Client` cannot be
    /// built, or a feed/geocoder error if a configured base URL is invalid.
    pub fn from_config(config: &AppConfig, lexicon: Lexicon) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        let feed = FeedClient::with_base_url(http.clone(), &config.usgs_base_url)?;
        let primary = NominatimClient::with_base_url(
            http.clone(),
            &config.user_agent,
            &config.nominatim_base_url,
        )?;
        let secondary = config
            .geonames_username
            .as_deref()
            .map(|username| {
                GeoNamesClient::with_base_url(http.clone(), username, &config.geonames_base_url)
            })
            .transpose()?;

        Ok(Self::new(feed, PlaceResolver::new(primary, secondary), lexicon))
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The full, unfiltered feed for `timeframe`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Feed`] if the feed cannot be fetched or decoded.
    pub async fn fetch_all(
        &self,
        timeframe: Timeframe,
    ) -> Result<Vec<EarthquakeRecord>, SearchError> {
        Ok(self.feed.fetch_all(timeframe).await?)
    }

    /// Finds earthquakes for a free-text place.
    ///
    /// Strategies run in order and the first one that applies wins:
    /// 1. geocoded point → everything within `radius_km`
    /// 2. case-insensitive substring of the place text
    /// 3. partial/fuzzy matching, returned even when empty
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidQuery`] / [`SearchError::InvalidRadius`] before
    ///   any network call.
    /// - [`SearchError::Feed`] if the feed is unavailable; no partial result
    ///   is returned.
    pub async fn search_by_location(
        &self,
        query: &str,
        radius_km: f64,
        timeframe: Timeframe,
    ) -> Result<SearchResult, SearchError> {
        let query = validate_query(query)?;
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(SearchError::InvalidRadius(radius_km));
        }

        let resolution = self.resolver.resolve(query).await;
        let records = self.feed.fetch_all(timeframe).await?;

        let result = match resolution {
            Resolution::Found(location) => {
                let matched = match_radius(&records, &location, radius_km);
                SearchResult::new(
                    SearchOrigin::Resolved(location),
                    MatchMethod::Coordinates,
                    matched,
                )
            }
            Resolution::NotFound => {
                tracing::debug!(query, "place not geocoded; falling back to text matching");
                self.match_text(&records, query)
            }
        };

        tracing::info!(
            query,
            radius_km,
            %timeframe,
            method = %result.method,
            total_found = result.total_found,
            "location search complete"
        );
        Ok(result)
    }

    /// Finds earthquakes whose place names a country, skipping geocoding.
    ///
    /// `limit` caps the records returned; without one, at most
    /// [`DEFAULT_COUNTRY_LIMIT`] are shown. `total_found` is never capped.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidQuery`] before any network call.
    /// - [`SearchError::Feed`] if the feed is unavailable.
    pub async fn search_by_country(
        &self,
        query: &str,
        timeframe: Timeframe,
        limit: Option<usize>,
    ) -> Result<SearchResult, SearchError> {
        let query = validate_query(query)?;
        let variations = self.lexicon.country_variations(query);
        let records = self.feed.fetch_all(timeframe).await?;

        let matched = match_country(&records, &variations);
        let result = SearchResult::new(
            SearchOrigin::Country {
                query: query.to_string(),
                variations,
            },
            MatchMethod::Country,
            matched,
        )
        .truncate(limit.unwrap_or(DEFAULT_COUNTRY_LIMIT));

        tracing::info!(
            query,
            %timeframe,
            total_found = result.total_found,
            showing = ?result.showing,
            "country search complete"
        );
        Ok(result)
    }

    fn match_text(&self, records: &[EarthquakeRecord], query: &str) -> SearchResult {
        let origin = SearchOrigin::Query {
            query: query.to_string(),
        };

        let by_name = match_place_name(records, query);
        if !by_name.is_empty() {
            return SearchResult::new(origin, MatchMethod::PlaceName, by_name);
        }

        tracing::debug!(query, "no place-name hits; trying partial match");
        let partial = match_partial(records, query, &self.lexicon);
        SearchResult::new(origin, MatchMethod::PartialMatch, partial)
    }
}

fn validate_query(query: &str) -> Result<&str, SearchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SearchError::InvalidQuery(
            "search query must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}
