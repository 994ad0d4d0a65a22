//! Earthquake search pipeline.
//!
//! [`SearchService`] resolves a free-text place, pulls the USGS feed, and
//! hands both to the strategies in [`matcher`]: coordinate radius, then
//! place-name substring, then partial/fuzzy matching. Country searches skip
//! geocoding and match on country-name equivalence classes.

pub mod error;
pub mod matcher;
pub mod service;

pub use error::SearchError;
pub use service::{SearchService, DEFAULT_COUNTRY_LIMIT, DEFAULT_RADIUS_KM};
