//! OpenStreetMap Nominatim free-text search.

use quakemap_core::ResolvedLocation;
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::http::{endpoint, get_json, parse_base_url, parse_coordinates};
use crate::types::NominatimPlace;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";
const PROVIDER: &str = "nominatim";

/// Client for Nominatim's `/search` endpoint.
///
/// Nominatim's usage policy rejects anonymous traffic, so every request
/// carries the configured `User-Agent`.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl NominatimClient {
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidBaseUrl`] only if the built-in URL fails
    /// to parse.
    pub fn new(client: Client, user_agent: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(client, user_agent, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        client: Client,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            user_agent: user_agent.to_owned(),
        })
    }

    /// Looks up the single best match for `query`.
    ///
    /// Returns `Ok(None)` when Nominatim has no match.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] on transport, status, decode or coordinate
    /// failures.
    pub async fn search(&self, query: &str) -> Result<Option<ResolvedLocation>, GeocodeError> {
        let url = endpoint(&self.base_url, "search")?;
        let request = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", "1"),
                ("accept-language", "en"),
            ]);

        let places: Vec<NominatimPlace> =
            get_json(request, &format!("nominatim search(q={query})")).await?;

        places.into_iter().next().map(to_location).transpose()
    }
}

fn to_location(place: NominatimPlace) -> Result<ResolvedLocation, GeocodeError> {
    let (latitude, longitude) = parse_coordinates(PROVIDER, &place.lat, &place.lon)?;
    let display_name = place
        .display_name
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    let address = place.address;

    Ok(ResolvedLocation {
        latitude,
        longitude,
        display_name,
        address: place.display_name,
        country: address.country,
        state: address.state.or(address.province),
        city: address.city.or(address.town).or(address.village),
        place_type: place.place_type,
        importance: place.importance,
    })
}
