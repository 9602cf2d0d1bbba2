//! Task endpoints
//!
//! - `GET /api/tasks` — the user's tasks sorted by position
//! - `POST /api/tasks` — create (requires `title`)
//! - `PATCH /api/tasks/{id}` — partial update; absent ids report 400
//! - `DELETE /api/tasks/{id}` — remove; absent ids still succeed
//! - `POST /api/tasks/reorder` — assign dense positions from an id list

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

use super::{empty_response, error_response, json_response, read_json_body};
use crate::model::{NewTask, TaskPatch};
use crate::server::AppState;
use crate::store::Storage;

/// Request body for POST /api/tasks/reorder
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub task_ids: Vec<String>,
}

/// Handle GET /api/tasks
pub async fn handle_list_tasks(state: Arc<AppState>) -> Response<Full<Bytes>> {
    match state.store.list_tasks(&state.args.user_id).await {
        Ok(tasks) => json_response(StatusCode::OK, tasks),
        Err(e) => {
            error!("Failed to list tasks: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Handle POST /api/tasks
pub async fn handle_create_task(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Response<Full<Bytes>> {
    let payload: NewTask = match read_json_body(req).await {
        Ok(p) => p,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.store.create_task(&state.args.user_id, payload).await {
        Ok(task) => json_response(StatusCode::CREATED, task),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

/// Handle PATCH /api/tasks/{id}
///
/// Store failures (including an absent id) report through the error's own
/// status mapping, which folds NotFound into the validation status class.
pub async fn handle_update_task(
    req: Request<Incoming>,
    state: Arc<AppState>,
    id: &str,
) -> Response<Full<Bytes>> {
    let patch: TaskPatch = match read_json_body(req).await {
        Ok(p) => p,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.store.update_task(id, patch).await {
        Ok(task) => json_response(StatusCode::OK, task),
        Err(e) => error_response(e.status_code(), &e.to_string()),
    }
}

/// Handle DELETE /api/tasks/{id}
pub async fn handle_delete_task(state: Arc<AppState>, id: &str) -> Response<Full<Bytes>> {
    match state.store.delete_task(id).await {
        Ok(()) => empty_response(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete task {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Handle POST /api/tasks/reorder
pub async fn handle_reorder_tasks(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Response<Full<Bytes>> {
    let payload: ReorderRequest = match read_json_body(req).await {
        Ok(p) => p,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.store.reorder_tasks(&payload.task_ids).await {
        Ok(()) => json_response(StatusCode::OK, serde_json::json!({ "success": true })),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}
