//! Request plumbing shared by the provider clients.

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::GeocodeError;

/// Parse a provider root URL, forcing exactly one trailing slash so that
/// `Url::join` appends endpoint names rather than replacing a segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, GeocodeError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

pub(crate) fn endpoint(base_url: &Url, name: &str) -> Result<Url, GeocodeError> {
    base_url.join(name).map_err(|e| GeocodeError::InvalidBaseUrl {
        base_url: base_url.to_string(),
        reason: e.to_string(),
    })
}

/// Send `request`, require a 2xx status, and decode the body as `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    context: &str,
) -> Result<T, GeocodeError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeocodeError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

/// Parse provider lat/lon strings into an in-range coordinate pair.
pub(crate) fn parse_coordinates(
    provider: &'static str,
    lat: &str,
    lon: &str,
) -> Result<(f64, f64), GeocodeError> {
    let parsed = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>());
    match parsed {
        (Ok(la), Ok(lo)) if quakemap_core::is_valid_coordinate(la, lo) => Ok((la, lo)),
        _ => Err(GeocodeError::InvalidCoordinates {
            provider,
            lat: lat.to_owned(),
            lon: lon.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_base_url_normalises_trailing_slash() {
        let url = parse_base_url("https://nominatim.openstreetmap.org").unwrap();
        assert_eq!(
            endpoint(&url, "search").unwrap().as_str(),
            "https://nominatim.openstreetmap.org/search"
        );
    }

    #[test]
    fn parse_coordinates_accepts_numeric_strings() {
        let (lat, lon) = parse_coordinates("test", "35.6828387", " 139.7594549").unwrap();
        assert!((lat - 35.682_838_7).abs() < 1e-9);
        assert!((lon - 139.759_454_9).abs() < 1e-9);
    }

    #[test]
    fn parse_coordinates_rejects_garbage_and_out_of_range() {
        assert!(matches!(
            parse_coordinates("test", "north", "10"),
            Err(GeocodeError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            parse_coordinates("test", "91", "10"),
            Err(GeocodeError::InvalidCoordinates { .. })
        ));
    }
}
