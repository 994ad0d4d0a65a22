//! Match strategies over a fetched earthquake list.
//!
//! The feed's `place` field is free prose ("32km ENE of Ridgecrest, CA"), so
//! the textual strategies are heuristics that trade precision for recall.
//! Every strategy returns records ordered by magnitude, largest first, with
//! unknown magnitudes last.

use std::cmp::Ordering;

use quakemap_core::{distance_km, EarthquakeRecord, Lexicon, ResolvedLocation};

/// Share of a term's characters that must occur in the place text for a
/// fuzzy hit, as `NUMERATOR / DENOMINATOR`.
const FUZZY_NUMERATOR: usize = 7;
const FUZZY_DENOMINATOR: usize = 10;

/// Terms this short only ever match literally.
const FUZZY_MIN_TERM_CHARS: usize = 3;

/// Descending magnitude; `None` sorts after every known magnitude.
#[must_use]
pub fn by_magnitude_desc(a: &EarthquakeRecord, b: &EarthquakeRecord) -> Ordering {
    match (a.magnitude, b.magnitude) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Records within `radius_km` (inclusive) of `location`.
#[must_use]
pub fn match_radius(
    records: &[EarthquakeRecord],
    location: &ResolvedLocation,
    radius_km: f64,
) -> Vec<EarthquakeRecord> {
    let mut matched: Vec<EarthquakeRecord> = records
        .iter()
        .filter(|r| {
            distance_km(location.latitude, location.longitude, r.latitude, r.longitude)
                <= radius_km
        })
        .cloned()
        .collect();
    matched.sort_by(by_magnitude_desc);
    matched
}

/// Records whose place text contains `query`, ignoring case.
#[must_use]
pub fn match_place_name(records: &[EarthquakeRecord], query: &str) -> Vec<EarthquakeRecord> {
    let needle = query.trim().to_lowercase();
    let mut matched: Vec<EarthquakeRecord> = records
        .iter()
        .filter(|r| r.place.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    matched.sort_by(by_magnitude_desc);
    matched
}

/// Expanded term list for partial matching, without duplicates, in the
/// order: full query, query without whitespace, each token, then every
/// abbreviation swap that applies to the query.
#[must_use]
pub fn search_terms(query: &str, lexicon: &Lexicon) -> Vec<String> {
    let lowered = query.trim().to_lowercase();
    let mut terms: Vec<String> = Vec::new();
    let mut push = |term: String| {
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    };

    push(lowered.clone());
    push(lowered.split_whitespace().collect::<String>());
    for token in lowered.split_whitespace() {
        push(token.to_string());
    }
    for abbr in &lexicon.abbreviations {
        if lowered.contains(&abbr.full) {
            push(lowered.replace(&abbr.full, &abbr.short));
        }
        if lowered.contains(&abbr.short) {
            push(lowered.replace(&abbr.short, &abbr.full));
        }
    }

    terms
}

/// Character-overlap test: at least 70% of `term`'s characters (counted
/// with repetition) occur somewhere in `text`. Terms under three characters
/// never fuzzy-match.
#[must_use]
pub fn fuzzy_matches(term: &str, text: &str) -> bool {
    let total = term.chars().count();
    if total < FUZZY_MIN_TERM_CHARS {
        return false;
    }
    let hits = term.chars().filter(|c| text.contains(*c)).count();
    hits * FUZZY_DENOMINATOR >= total * FUZZY_NUMERATOR
}

/// Substring-or-fuzzy match against the expanded [`search_terms`].
///
/// Records containing the whole query rank ahead of the rest; magnitude
/// orders each tier.
#[must_use]
pub fn match_partial(
    records: &[EarthquakeRecord],
    query: &str,
    lexicon: &Lexicon,
) -> Vec<EarthquakeRecord> {
    let exact = query.trim().to_lowercase();
    let terms = search_terms(query, lexicon);

    let mut matched: Vec<(bool, EarthquakeRecord)> = records
        .iter()
        .filter_map(|r| {
            let place = r.place.to_lowercase();
            let hit = terms
                .iter()
                .any(|term| place.contains(term.as_str()) || fuzzy_matches(term, &place));
            hit.then(|| (place.contains(&exact), r.clone()))
        })
        .collect();

    matched.sort_by(|(a_exact, a), (b_exact, b)| {
        b_exact.cmp(a_exact).then_with(|| by_magnitude_desc(a, b))
    });
    matched.into_iter().map(|(_, r)| r).collect()
}

/// Records whose place has a comma-separated segment equal to, containing,
/// or contained in any of `variations` (already lowercased).
#[must_use]
pub fn match_country(
    records: &[EarthquakeRecord],
    variations: &[String],
) -> Vec<EarthquakeRecord> {
    let mut matched: Vec<EarthquakeRecord> = records
        .iter()
        .filter(|r| {
            r.place
                .split(',')
                .map(|segment| segment.trim().to_lowercase())
                .filter(|segment| !segment.is_empty())
                .any(|segment| {
                    variations.iter().any(|v| {
                        segment == *v || segment.contains(v.as_str()) || v.contains(&segment)
                    })
                })
        })
        .cloned()
        .collect();
    matched.sort_by(by_magnitude_desc);
    matched
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
