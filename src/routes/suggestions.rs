//! Smart-suggestions endpoint
//!
//! `GET /api/suggestions` serves the fixed prompt menu. The list is static
//! data; nothing here reads task state.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};

use super::json_response;
use crate::model::SUGGESTIONS;

/// Handle GET /api/suggestions
pub fn handle_suggestions() -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, SUGGESTIONS)
}
