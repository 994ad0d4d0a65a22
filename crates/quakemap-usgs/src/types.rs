//! Wire types for the USGS GeoJSON summary feed.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! feed is ignored by serde.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub id: String,
    pub properties: FeatureProperties,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeatureProperties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    /// Epoch milliseconds.
    pub time: Option<i64>,
    pub url: Option<String>,
    pub sig: Option<i64>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude, depth_km]`.
    #[serde(default)]
    pub coordinates: Vec<f64>,
}
