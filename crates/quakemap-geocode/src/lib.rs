//! Free-text place resolution.
//!
//! [`PlaceResolver`] asks OpenStreetMap Nominatim first and falls back to
//! `GeoNames`. Provider failures are logged and treated as "no result"; only
//! exhausting every provider yields [`quakemap_core::Resolution::NotFound`].

pub mod error;
pub mod geonames;
mod http;
pub mod nominatim;
pub mod resolver;
pub mod types;

pub use error::GeocodeError;
pub use geonames::GeoNamesClient;
pub use nominatim::NominatimClient;
pub use resolver::PlaceResolver;
