//! Statistics endpoint
//!
//! `GET /api/stats` returns the user's stats record, or an empty 200 body
//! when no record exists yet (a user who never wrote anything).

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use std::sync::Arc;
use tracing::error;

use super::{empty_response, error_response, json_response};
use crate::server::AppState;
use crate::store::Storage;

/// Handle GET /api/stats
pub async fn handle_get_stats(state: Arc<AppState>) -> Response<Full<Bytes>> {
    match state.store.get_user_stats(&state.args.user_id).await {
        Ok(Some(stats)) => json_response(StatusCode::OK, stats),
        Ok(None) => empty_response(StatusCode::OK),
        Err(e) => {
            error!("Failed to load stats: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}
