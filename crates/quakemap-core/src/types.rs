use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One seismic event from the upstream catalog.
///
/// Built fresh from each feed response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthquakeRecord {
    pub id: String,
    /// Absent for some automatic solutions; sorts last in magnitude order.
    pub magnitude: Option<f64>,
    pub place: String,
    pub time: DateTime<Utc>,
    /// Kilometers below the surface.
    pub depth: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub url: String,
    pub significance: i64,
    #[serde(rename = "type")]
    pub event_type: String,
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Short label, e.g. `"Tokyo"`.
    pub display_name: String,
    /// Full provider address string.
    pub address: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    /// Provider confidence. Informational only, never used for ranking.
    pub importance: Option<f64>,
}

/// Outcome of geocoding a free-text place. Not-found is a valid answer, not
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(ResolvedLocation),
    NotFound,
}

impl Resolution {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Which strategy produced a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    Coordinates,
    PlaceName,
    PartialMatch,
    Country,
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMethod::Coordinates => write!(f, "coordinates"),
            MatchMethod::PlaceName => write!(f, "place_name"),
            MatchMethod::PartialMatch => write!(f, "partial_match"),
            MatchMethod::Country => write!(f, "country"),
        }
    }
}

/// What a search was anchored on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOrigin {
    /// Geocoded point used for a radius search.
    Resolved(ResolvedLocation),
    /// Raw text used for place-name or partial matching.
    Query { query: String },
    /// Country query together with the names it expanded to.
    Country {
        query: String,
        variations: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub location: SearchOrigin,
    pub earthquakes: Vec<EarthquakeRecord>,
    /// Match count before any truncation.
    pub total_found: usize,
    pub method: MatchMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showing: Option<usize>,
}

impl SearchResult {
    /// Wraps an already-ranked match list.
    #[must_use]
    pub fn new(
        location: SearchOrigin,
        method: MatchMethod,
        earthquakes: Vec<EarthquakeRecord>,
    ) -> Self {
        Self {
            location,
            total_found: earthquakes.len(),
            earthquakes,
            method,
            showing: None,
        }
    }

    /// Keeps the first `limit` records and records how many are shown.
    /// `total_found` is left untouched.
    #[must_use]
    pub fn truncate(mut self, limit: usize) -> Self {
        self.earthquakes.truncate(limit);
        self.showing = Some(self.earthquakes.len());
        self
    }
}

/// Upstream feed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Hour,
    Day,
    Week,
    Month,
}

impl Timeframe {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Hour => "hour",
            Timeframe::Day => "day",
            Timeframe::Week => "week",
            Timeframe::Month => "month",
        }
    }

    /// Summary feed file name for this window, e.g. `all_week.geojson`.
    #[must_use]
    pub fn feed_file(self) -> String {
        format!("all_{}.geojson", self.as_str())
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" => Ok(Timeframe::Hour),
            "day" => Ok(Timeframe::Day),
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            _ => Err(CoreError::InvalidTimeframe(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> EarthquakeRecord {
        EarthquakeRecord {
            id: id.to_string(),
            magnitude: Some(4.5),
            place: "10km SE of Tokyo, Japan".to_string(),
            time: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
            depth: 10.0,
            latitude: 35.6,
            longitude: 139.7,
            url: "https://earthquake.usgs.gov/earthquakes/eventpage/us1".to_string(),
            significance: 312,
            event_type: "earthquake".to_string(),
        }
    }

    #[test]
    fn timeframe_parses_case_insensitively() {
        assert_eq!("Week".parse::<Timeframe>(), Ok(Timeframe::Week));
        assert_eq!(" month ".parse::<Timeframe>(), Ok(Timeframe::Month));
        assert_eq!(
            "year".parse::<Timeframe>(),
            Err(CoreError::InvalidTimeframe("year".to_string()))
        );
    }

    #[test]
    fn timeframe_feed_file_names() {
        assert_eq!(Timeframe::Hour.feed_file(), "all_hour.geojson");
        assert_eq!(Timeframe::Month.feed_file(), "all_month.geojson");
    }

    #[test]
    fn truncate_keeps_total_found() {
        let result = SearchResult::new(
            SearchOrigin::Query {
                query: "japan".to_string(),
            },
            MatchMethod::PlaceName,
            vec![record("a"), record("b"), record("c")],
        )
        .truncate(2);
        assert_eq!(result.total_found, 3);
        assert_eq!(result.showing, Some(2));
        assert_eq!(result.earthquakes.len(), 2);
    }

    #[test]
    fn truncate_beyond_length_shows_everything() {
        let result = SearchResult::new(
            SearchOrigin::Query {
                query: "japan".to_string(),
            },
            MatchMethod::PlaceName,
            vec![record("a")],
        )
        .truncate(50);
        assert_eq!(result.showing, Some(1));
        assert_eq!(result.total_found, 1);
    }

    #[test]
    fn search_result_serializes_with_camel_case_keys() {
        let result = SearchResult::new(
            SearchOrigin::Country {
                query: "usa".to_string(),
                variations: vec!["united states".to_string()],
            },
            MatchMethod::Country,
            vec![record("a")],
        );
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["totalFound"], 1);
        assert_eq!(json["method"], "country");
        assert_eq!(json["location"]["kind"], "country");
        assert!(json.get("showing").is_none());
        assert_eq!(json["earthquakes"][0]["type"], "earthquake");
    }
}
