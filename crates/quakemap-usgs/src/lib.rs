//! Client for the USGS earthquake summary feeds.
//!
//! One GET per call against `all_<timeframe>.geojson`; every feature is
//! normalized into a [`quakemap_core::EarthquakeRecord`]. Failures are
//! returned to the caller unretried.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::FeedClient;
pub use error::FeedError;
pub use normalize::normalize_feature;
pub use types::{Feature, FeatureCollection, FeatureProperties, Geometry};
