use chrono::DateTime;
use quakemap_core::{is_valid_coordinate, EarthquakeRecord};

use crate::types::Feature;

/// Map one GeoJSON feature onto an [`EarthquakeRecord`].
///
/// GeoJSON orders coordinates `[lon, lat, depth]`; they are swapped into
/// named fields here. Returns `None` for features without a usable position
/// or timestamp, since every record must carry an in-range lat/lon.
#[must_use]
pub fn normalize_feature(feature: Feature) -> Option<EarthquakeRecord> {
    let coords = feature.geometry.map(|g| g.coordinates).unwrap_or_default();
    let (Some(&longitude), Some(&latitude)) = (coords.first(), coords.get(1)) else {
        tracing::debug!(id = %feature.id, "dropping feature without coordinates");
        return None;
    };
    if !is_valid_coordinate(latitude, longitude) {
        tracing::debug!(
            id = %feature.id,
            latitude,
            longitude,
            "dropping feature with out-of-range coordinates"
        );
        return None;
    }

    let props = feature.properties;
    let Some(time) = props.time.and_then(DateTime::from_timestamp_millis) else {
        tracing::debug!(id = %feature.id, "dropping feature without a valid time");
        return None;
    };

    Some(EarthquakeRecord {
        id: feature.id,
        magnitude: props.mag,
        place: props.place.unwrap_or_default(),
        time,
        depth: coords.get(2).copied().unwrap_or(0.0),
        latitude,
        longitude,
        url: props.url.unwrap_or_default(),
        significance: props.sig.unwrap_or(0),
        event_type: props
            .event_type
            .unwrap_or_else(|| "earthquake".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeatureProperties, Geometry};

    fn feature(coordinates: Vec<f64>) -> Feature {
        Feature {
            id: "ci40000001".to_string(),
            properties: FeatureProperties {
                mag: Some(3.2),
                place: Some("32km ENE of Ridgecrest, CA".to_string()),
                time: Some(1_700_000_000_000),
                url: Some("https://earthquake.usgs.gov/earthquakes/eventpage/ci40000001".to_string()),
                sig: Some(158),
                event_type: Some("earthquake".to_string()),
            },
            geometry: Some(Geometry { coordinates }),
        }
    }

    #[test]
    fn swaps_geojson_coordinate_order() {
        let record = normalize_feature(feature(vec![-117.4, 35.7, 8.2])).expect("record");
        assert!((record.longitude - -117.4).abs() < f64::EPSILON);
        assert!((record.latitude - 35.7).abs() < f64::EPSILON);
        assert!((record.depth - 8.2).abs() < f64::EPSILON);
        assert_eq!(record.id, "ci40000001");
        assert_eq!(record.significance, 158);
        assert_eq!(record.time.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn missing_depth_defaults_to_zero() {
        let record = normalize_feature(feature(vec![10.0, 20.0])).expect("record");
        assert!(record.depth.abs() < f64::EPSILON);
    }

    #[test]
    fn drops_feature_without_coordinates() {
        assert!(normalize_feature(feature(vec![10.0])).is_none());
        let mut f = feature(vec![]);
        f.geometry = None;
        assert!(normalize_feature(f).is_none());
    }

    #[test]
    fn drops_out_of_range_latitude() {
        assert!(normalize_feature(feature(vec![10.0, 95.0, 1.0])).is_none());
    }

    #[test]
    fn fills_defaults_for_sparse_properties() {
        let mut f = feature(vec![139.7, 35.6, 30.0]);
        f.properties = FeatureProperties {
            time: Some(0),
            ..FeatureProperties::default()
        };
        let record = normalize_feature(f).expect("record");
        assert!(record.magnitude.is_none());
        assert_eq!(record.place, "");
        assert_eq!(record.url, "");
        assert_eq!(record.significance, 0);
        assert_eq!(record.event_type, "earthquake");
    }

    #[test]
    fn drops_feature_without_time() {
        let mut f = feature(vec![139.7, 35.6, 30.0]);
        f.properties.time = None;
        assert!(normalize_feature(f).is_none());
    }
}
