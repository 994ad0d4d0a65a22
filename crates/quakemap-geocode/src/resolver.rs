use quakemap_core::{Resolution, ResolvedLocation};

use crate::error::GeocodeError;
use crate::geonames::GeoNamesClient;
use crate::nominatim::NominatimClient;

/// Two-provider place resolver: Nominatim first, then `GeoNames`.
#[derive(Debug, Clone)]
pub struct PlaceResolver {
    primary: NominatimClient,
    secondary: Option<GeoNamesClient>,
}

impl PlaceResolver {
    /// `secondary` is optional; without a `GeoNames` account only Nominatim
    /// is consulted.
    #[must_use]
    pub fn new(primary: NominatimClient, secondary: Option<GeoNamesClient>) -> Self {
        Self { primary, secondary }
    }

    /// Resolves `place` to coordinates.
    ///
    /// Never fails: a provider error is logged and treated the same as an
    /// empty answer from that provider.
    pub async fn resolve(&self, place: &str) -> Resolution {
        if let Some(location) = settle("nominatim", place, self.primary.search(place).await) {
            return Resolution::Found(location);
        }

        if let Some(geonames) = &self.secondary {
            if let Some(location) = settle("geonames", place, geonames.search(place).await) {
                return Resolution::Found(location);
            }
        } else {
            tracing::debug!(place, "geonames not configured; skipping secondary geocoder");
        }

        tracing::debug!(place, "no geocoder could resolve place");
        Resolution::NotFound
    }
}

fn settle(
    provider: &'static str,
    place: &str,
    outcome: Result<Option<ResolvedLocation>, GeocodeError>,
) -> Option<ResolvedLocation> {
    match outcome {
        Ok(Some(location)) => {
            tracing::debug!(
                provider,
                place,
                display_name = %location.display_name,
                latitude = location.latitude,
                longitude = location.longitude,
                "resolved place"
            );
            Some(location)
        }
        Ok(None) => {
            tracing::debug!(provider, place, "geocoder returned no match");
            None
        }
        Err(error) => {
            tracing::warn!(provider, place, error = %error, "geocoder failed; treating as no match");
            None
        }
    }
}
