mod collections;
mod dashboard;
mod demo;
mod filters;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;

use crate::middleware::{
    enforce_rate_limit, require_bearer_auth, AuthState, RateLimitState, RequestId,
};
use crate::state::AppState;

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
    snapshots: &'static str,
    sources: &'static str,
}

impl ResponseMeta {
    pub(crate) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) fn new(req_id: &RequestId, data: T) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::new(req_id.0.clone()),
        })
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
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "conflict" => StatusCode::CONFLICT,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Unwrap a JSON body, turning extractor rejections into the error envelope.
pub(crate) fn json_body<T>(
    req_id: &RequestId,
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| rejected(req_id, &rejection))
}

pub(crate) fn rejected(req_id: &RequestId, rejection: &JsonRejection) -> ApiError {
    ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
}

fn protected_router(auth: AuthState, rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/customers",
            get(collections::list_customers).put(collections::replace_customers),
        )
        .route(
            "/api/v1/interactions",
            get(collections::list_interactions).put(collections::replace_interactions),
        )
        .route(
            "/api/v1/complaints",
            get(collections::list_complaints).put(collections::replace_complaints),
        )
        .route(
            "/api/v1/reviews",
            get(collections::list_reviews).put(collections::replace_reviews),
        )
        .route(
            "/api/v1/insights",
            get(collections::list_insights).put(collections::replace_insights),
        )
        .route(
            "/api/v1/filters",
            get(filters::get_filters).delete(filters::clear_filters),
        )
        .route(
            "/api/v1/filters/{entity}",
            patch(filters::patch_filter).delete(filters::clear_filter),
        )
        .route("/api/v1/dashboard/stats", get(dashboard::stats))
        .route("/api/v1/store/regenerate", post(dashboard::regenerate))
        .route("/api/v1/competitive", get(dashboard::competitive))
        .route("/api/v1/demo/nyc-restaurant", get(dashboard::nyc_restaurant))
        .route("/api/v1/demo/sessions", post(demo::create_session))
        .route("/api/v1/demo/sessions/{id}", get(demo::get_session))
        .route(
            "/api/v1/demo/sessions/{id}/analyze",
            post(demo::start_analysis),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    auth,
                    require_bearer_auth,
                ))
                .layer(axum::middleware::from_fn_with_state(
                    rate_limit,
                    enforce_rate_limit,
                )),
        )
}

/// All `/api/v1` routes; request-id, CORS and tracing are layered on by the caller.
pub fn router(auth: AuthState, rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(health))
        .merge(protected_router(auth, rate_limit))
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    ApiResponse::new(
        &req_id,
        HealthData {
            status: "ok",
            snapshots: if state.snapshots.is_some() {
                "enabled"
            } else {
                "disabled"
            },
            sources: if state.sources.any_configured() {
                "live"
            } else {
                "fallback"
            },
        },
    )
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
