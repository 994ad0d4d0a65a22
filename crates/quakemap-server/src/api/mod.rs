mod earthquakes;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use quakemap_core::Timeframe;
use quakemap_search::{SearchError, SearchService};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

/// Upper bound on `limit` for any listing endpoint.
const MAX_LIMIT: usize = 1_000;

#[derive(Debug, Clone)]
pub struct AppState {
    pub search: SearchService,
    pub default_radius_km: f64,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    version: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Clamps a caller-supplied limit into `1..=MAX_LIMIT`; `None` stays `None`
/// so each endpoint can apply its own default.
pub(super) fn normalize_limit(limit: Option<i64>) -> Option<usize> {
    limit.map(|l| usize::try_from(l).map_or(1, |l| l.clamp(1, MAX_LIMIT)))
}

/// Absent or blank means `fallback`; anything else must name a feed window.
pub(super) fn parse_timeframe(
    request_id: &str,
    raw: Option<&str>,
    fallback: Timeframe,
) -> Result<Timeframe, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(fallback),
        Some(value) => value
            .parse()
            .map_err(|e: quakemap_core::CoreError| {
                ApiError::new(request_id, "validation_error", e.to_string())
            }),
    }
}

pub(super) fn map_search_error(request_id: String, error: &SearchError) -> ApiError {
    match error {
        SearchError::InvalidQuery(_) | SearchError::InvalidRadius(_) => {
            ApiError::new(request_id, "validation_error", error.to_string())
        }
        SearchError::Feed(_) => {
            tracing::error!(error = %error, "earthquake feed request failed");
            ApiError::new(request_id, "upstream_error", "earthquake feed unavailable")
        }
        SearchError::Geocoder(_) | SearchError::HttpClient(_) => {
            tracing::error!(error = %error, "search pipeline misconfigured");
            ApiError::new(request_id, "internal_error", "search failed")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/earthquakes", get(earthquakes::list_earthquakes))
        .route(
            "/api/earthquakes/search",
            get(earthquakes::search_earthquakes),
        )
        .route(
            "/api/earthquakes/country",
            get(earthquakes::search_by_country),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
