use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use bizlens_wizard::WizardError;
use uuid::Uuid;

use crate::demo::{DemoRequest, SessionView, StartError};
use crate::middleware::RequestId;
use crate::state::AppState;

use super::{json_body, ApiError, ApiResponse};

/// POST /api/v1/demo/sessions: validate the three inputs and queue a
/// session. The analysis starts on a separate call.
pub(super) async fn create_session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<DemoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<SessionView>>), ApiError> {
    let request = json_body(&req_id, body)?;
    let id = state
        .sessions
        .create(&state, &request)
        .await
        .map_err(|e| wizard_error(&req_id, &e))?;
    let view = lookup(&state, &req_id, id).await?;
    Ok((StatusCode::CREATED, ApiResponse::new(&req_id, view)))
}

pub(super) async fn get_session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SessionView>>, ApiError> {
    let view = lookup(&state, &req_id, id).await?;
    Ok(ApiResponse::new(&req_id, view))
}

/// POST /api/v1/demo/sessions/{id}/analyze: run the analysis in the
/// background. Poll the session for progress.
pub(super) async fn start_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<SessionView>>), ApiError> {
    match state.sessions.start(id).await {
        Ok(view) => Ok((StatusCode::ACCEPTED, ApiResponse::new(&req_id, view))),
        Err(StartError::NotFound) => Err(session_not_found(&req_id, id)),
        Err(StartError::AlreadyStarted) => Err(ApiError::new(
            req_id.0.clone(),
            "conflict",
            format!("analysis for session {id} has already started"),
        )),
    }
}

async fn lookup(state: &AppState, req_id: &RequestId, id: Uuid) -> Result<SessionView, ApiError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(req_id, id))
}

fn session_not_found(req_id: &RequestId, id: Uuid) -> ApiError {
    ApiError::new(
        req_id.0.clone(),
        "not_found",
        format!("demo session {id} not found"),
    )
}

fn wizard_error(req_id: &RequestId, error: &WizardError) -> ApiError {
    let code = match error {
        WizardError::MissingFields(_) => "validation_error",
        WizardError::InvalidTransition { .. } => "internal_error",
    };
    ApiError::new(req_id.0.clone(), code, error.to_string())
}
