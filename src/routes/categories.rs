//! Category endpoints
//!
//! - `GET /api/categories` — list the user's categories
//! - `POST /api/categories` — create one (requires `name` and `color`)
//! - `DELETE /api/categories/{id}` — remove one; absent ids still succeed

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use std::sync::Arc;
use tracing::error;

use super::{empty_response, error_response, json_response, read_json_body};
use crate::model::NewCategory;
use crate::server::AppState;
use crate::store::Storage;

/// Handle GET /api/categories
pub async fn handle_list_categories(state: Arc<AppState>) -> Response<Full<Bytes>> {
    match state.store.list_categories(&state.args.user_id).await {
        Ok(categories) => json_response(StatusCode::OK, categories),
        Err(e) => {
            error!("Failed to list categories: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Handle POST /api/categories
pub async fn handle_create_category(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Response<Full<Bytes>> {
    let payload: NewCategory = match read_json_body(req).await {
        Ok(p) => p,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.store.create_category(&state.args.user_id, payload).await {
        Ok(category) => json_response(StatusCode::CREATED, category),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

/// Handle DELETE /api/categories/{id}
pub async fn handle_delete_category(state: Arc<AppState>, id: &str) -> Response<Full<Bytes>> {
    match state.store.delete_category(id).await {
        Ok(()) => empty_response(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete category {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}
