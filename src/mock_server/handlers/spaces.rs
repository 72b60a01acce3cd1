//! Space endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::{CreateSpaceParams, UpdateSpaceParams};

/// JSON error body in the shape the Kaiten API uses.
fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

fn not_found(id: u64) -> Response {
    error(StatusCode::NOT_FOUND, &format!("Space {id} not found"))
}

/// Reject the request unless it carries the required bearer token.
fn check_auth(state: &MockState, headers: &HeaderMap) -> Option<Response> {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if state.is_authorized(authorization) {
        None
    } else {
        Some(error(StatusCode::UNAUTHORIZED, "Unauthorized"))
    }
}

/// GET /spaces
pub async fn list_spaces(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Some(denied) = check_auth(&state, &headers) {
        return denied;
    }

    let spaces: Vec<_> = state.list_spaces().into_iter().cloned().collect();
    (StatusCode::OK, Json(spaces)).into_response()
}

/// GET /spaces/{id}
pub async fn get_space(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Some(denied) = check_auth(&state, &headers) {
        return denied;
    }

    match state.get_space(id) {
        Some(space) => (StatusCode::OK, Json(space.clone())).into_response(),
        None => not_found(id),
    }
}

/// POST /spaces
pub async fn create_space(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(params): Json<CreateSpaceParams>,
) -> Response {
    let mut state = state.write().await;
    if let Some(denied) = check_auth(&state, &headers) {
        return denied;
    }

    // Kaiten answers 200, not 201, for a created space.
    match state.create_space(params) {
        Some(space) => (StatusCode::OK, Json(space.clone())).into_response(),
        None => error(StatusCode::BAD_REQUEST, "title is required"),
    }
}

/// PATCH /spaces/{id}
pub async fn update_space(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(params): Json<UpdateSpaceParams>,
) -> Response {
    let mut state = state.write().await;
    if let Some(denied) = check_auth(&state, &headers) {
        return denied;
    }

    match state.update_space(id, params) {
        Some(space) => (StatusCode::OK, Json(space.clone())).into_response(),
        None => not_found(id),
    }
}

/// DELETE /spaces/{id}
pub async fn remove_space(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let mut state = state.write().await;
    if let Some(denied) = check_auth(&state, &headers) {
        return denied;
    }

    match state.remove_space(id) {
        Some(space) => (StatusCode::OK, Json(space)).into_response(),
        None => not_found(id),
    }
}
