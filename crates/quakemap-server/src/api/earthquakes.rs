use axum::{
    extract::{Query, State},
    Extension, Json,
};
use quakemap_core::{EarthquakeRecord, SearchResult, Timeframe};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{
    map_search_error, normalize_limit, parse_timeframe, ApiError, ApiResponse, AppState,
    ResponseMeta,
};

#[derive(Debug, Deserialize)]
pub(super) struct FeedQuery {
    pub timeframe: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocationQuery {
    #[serde(default)]
    pub location: String,
    pub radius: Option<f64>,
    pub timeframe: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CountryQuery {
    #[serde(default)]
    pub country: String,
    pub timeframe: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FeedData {
    pub timeframe: Timeframe,
    pub count: usize,
    pub earthquakes: Vec<EarthquakeRecord>,
}

pub(super) async fn list_earthquakes(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<FeedQuery>,
) -> Result<Json<ApiResponse<FeedData>>, ApiError> {
    let timeframe = parse_timeframe(&req_id.0, params.timeframe.as_deref(), Timeframe::Day)?;

    let earthquakes = state
        .search
        .fetch_all(timeframe)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: FeedData {
            timeframe,
            count: earthquakes.len(),
            earthquakes,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn search_earthquakes(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<ApiResponse<SearchResult>>, ApiError> {
    let timeframe = parse_timeframe(&req_id.0, params.timeframe.as_deref(), Timeframe::Month)?;
    let radius_km = params.radius.unwrap_or(state.default_radius_km);

    let mut result = state
        .search
        .search_by_location(&params.location, radius_km, timeframe)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    if let Some(limit) = normalize_limit(params.limit) {
        result = result.truncate(limit);
    }

    Ok(Json(ApiResponse {
        data: result,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn search_by_country(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<CountryQuery>,
) -> Result<Json<ApiResponse<SearchResult>>, ApiError> {
    let timeframe = parse_timeframe(&req_id.0, params.timeframe.as_deref(), Timeframe::Month)?;

    let result = state
        .search
        .search_by_country(&params.country, timeframe, normalize_limit(params.limit))
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: result,
        meta: ResponseMeta::new(req_id.0),
    }))
}
