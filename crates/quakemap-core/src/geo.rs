//! Great-circle distance on a spherical Earth.

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two latitude/longitude points
/// given in degrees.
///
/// Total for any valid coordinate pair, including identical and antipodal
/// points. The intermediate term is clamped to `[0, 1]` so rounding near the
/// antipode never yields `NaN`.
#[must_use]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Whether `lat`/`lon` lie within `[-90, 90]` and `[-180, 180]`.
#[must_use]
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}
