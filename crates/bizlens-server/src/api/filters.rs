use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use bizlens_store::Filters;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::middleware::RequestId;
use crate::state::AppState;

use super::{json_body, ApiError, ApiResponse};

pub(super) async fn get_filters(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Filters>> {
    let filters = state.store.read().await.filters().clone();
    ApiResponse::new(&req_id, filters)
}

/// PATCH /api/v1/filters/{entity}: merge the given keys into that entity's
/// criteria and return the criteria now in effect.
pub(super) async fn patch_filter(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(entity): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let patch = json_body(&req_id, body)?;

    let current = {
        let mut store = state.store.write().await;
        match entity.as_str() {
            "customers" => {
                store.set_customer_filter(parse(&req_id, patch)?);
                to_json(&req_id, &store.filters().customers)?
            }
            "interactions" => {
                store.set_interaction_filter(parse(&req_id, patch)?);
                to_json(&req_id, &store.filters().interactions)?
            }
            "complaints" => {
                store.set_complaint_filter(parse(&req_id, patch)?);
                to_json(&req_id, &store.filters().complaints)?
            }
            "reviews" => {
                store.set_review_filter(parse(&req_id, patch)?);
                to_json(&req_id, &store.filters().reviews)?
            }
            "insights" => {
                store.set_insight_filter(parse(&req_id, patch)?);
                to_json(&req_id, &store.filters().insights)?
            }
            other => return Err(unknown_entity(&req_id, other)),
        }
    };

    tracing::debug!(entity = %entity, "filter criteria merged");
    state.persist().await;
    Ok(ApiResponse::new(&req_id, current))
}

/// DELETE /api/v1/filters/{entity}: drop every criterion for one entity and
/// leave the others alone.
pub(super) async fn clear_filter(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(entity): Path<String>,
) -> Result<Json<ApiResponse<Filters>>, ApiError> {
    let filters = {
        let mut store = state.store.write().await;
        match entity.as_str() {
            "customers" => store.clear_customer_filter(),
            "interactions" => store.clear_interaction_filter(),
            "complaints" => store.clear_complaint_filter(),
            "reviews" => store.clear_review_filter(),
            "insights" => store.clear_insight_filter(),
            other => return Err(unknown_entity(&req_id, other)),
        }
        store.filters().clone()
    };

    tracing::debug!(entity = %entity, "filter criteria cleared");
    state.persist().await;
    Ok(ApiResponse::new(&req_id, filters))
}

pub(super) async fn clear_filters(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Filters>> {
    let filters = {
        let mut store = state.store.write().await;
        store.clear_filters();
        store.filters().clone()
    };
    state.persist().await;
    ApiResponse::new(&req_id, filters)
}

fn unknown_entity(req_id: &RequestId, entity: &str) -> ApiError {
    ApiError::new(
        req_id.0.clone(),
        "not_found",
        format!("no filterable collection named '{entity}'"),
    )
}

fn parse<F: DeserializeOwned>(req_id: &RequestId, patch: Value) -> Result<F, ApiError> {
    serde_json::from_value(patch)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))
}

fn to_json<F: Serialize>(req_id: &RequestId, criteria: &F) -> Result<Value, ApiError> {
    serde_json::to_value(criteria)
        .map_err(|e| ApiError::new(req_id.0.clone(), "internal_error", e.to_string()))
}
