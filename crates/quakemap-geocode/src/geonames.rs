//! `GeoNames` `searchJSON` lookup, used when Nominatim has no answer.

use quakemap_core::ResolvedLocation;
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::http::{endpoint, get_json, parse_base_url, parse_coordinates};
use crate::types::{GeoNamesPlace, GeoNamesResponse};

const DEFAULT_BASE_URL: &str = "http://api.geonames.org/";
const PROVIDER: &str = "geonames";

/// Client for the `GeoNames` search web service, keyed by account username.
#[derive(Debug, Clone)]
pub struct GeoNamesClient {
    client: Client,
    base_url: Url,
    username: String,
}

impl GeoNamesClient {
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidBaseUrl`] only if the built-in URL fails
    /// to parse.
    pub fn new(client: Client, username: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(client, username, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        client: Client,
        username: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            username: username.to_owned(),
        })
    }

    /// Looks up the top-ranked row for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Api`] when `GeoNames` answers with a `status`
    /// object (bad credentials, exhausted credits), and other
    /// [`GeocodeError`] variants on transport or decode failures.
    pub async fn search(&self, query: &str) -> Result<Option<ResolvedLocation>, GeocodeError> {
        let url = endpoint(&self.base_url, "searchJSON")?;
        let request = self.client.get(url).query(&[
            ("q", query),
            ("maxRows", "1"),
            ("username", self.username.as_str()),
            ("style", "FULL"),
        ]);

        let response: GeoNamesResponse =
            get_json(request, &format!("geonames searchJSON(q={query})")).await?;

        if let Some(status) = response.status {
            return Err(GeocodeError::Api {
                provider: PROVIDER,
                message: match status.value {
                    Some(code) => format!("{} (code {code})", status.message),
                    None => status.message,
                },
            });
        }

        response.geonames.into_iter().next().map(to_location).transpose()
    }
}

fn to_location(place: GeoNamesPlace) -> Result<ResolvedLocation, GeocodeError> {
    let (latitude, longitude) = parse_coordinates(PROVIDER, &place.lat, &place.lng)?;

    let label = [
        Some(place.name.as_str()),
        place.admin_name1.as_deref(),
        place.country_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ");

    Ok(ResolvedLocation {
        latitude,
        longitude,
        display_name: label.clone(),
        address: label,
        country: place.country_name,
        state: place.admin_name1,
        city: Some(place.name).filter(|n| !n.trim().is_empty()),
        place_type: place.fcode_name,
        importance: place.score,
    })
}
