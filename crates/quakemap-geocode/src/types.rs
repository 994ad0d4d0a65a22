//! Wire types for the geocoding providers.

use serde::Deserialize;

/// One row of a Nominatim `/search?format=json` response.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub address: NominatimAddress,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub importance: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    pub country: Option<String>,
    pub state: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
}

/// `GeoNames` `searchJSON` envelope.
///
/// Errors come back as HTTP 200 with a `status` object instead of `geonames`.
#[derive(Debug, Deserialize)]
pub struct GeoNamesResponse {
    #[serde(default)]
    pub geonames: Vec<GeoNamesPlace>,
    pub status: Option<GeoNamesStatus>,
}

#[derive(Debug, Deserialize)]
pub struct GeoNamesStatus {
    #[serde(default)]
    pub message: String,
    pub value: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoNamesPlace {
    pub lat: String,
    pub lng: String,
    #[serde(default)]
    pub name: String,
    pub admin_name1: Option<String>,
    pub country_name: Option<String>,
    pub fcode_name: Option<String>,
    pub score: Option<f64>,
}
