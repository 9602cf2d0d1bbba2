//! HTTP routes for Taskdeck

pub mod categories;
pub mod health;
pub mod stats;
pub mod suggestions;
pub mod tasks;

pub use categories::{handle_create_category, handle_delete_category, handle_list_categories};
pub use health::{health_check, version_info};
pub use stats::handle_get_stats;
pub use suggestions::handle_suggestions;
pub use tasks::{
    handle_create_task, handle_delete_task, handle_list_tasks, handle_reorder_tasks,
    handle_update_task,
};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::Serialize;

use crate::types::{Result, TaskdeckError};

/// Serialize a body to a JSON response with CORS headers
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response<Full<Bytes>> {
    match serde_json::to_string(&body) {
        Ok(json) => Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(Full::new(Bytes::from(json)))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Full::new(Bytes::from("Failed to build response")))
                    .unwrap()
            }),
        Err(_) => Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Full::new(Bytes::from("Failed to serialize response")))
            .unwrap(),
    }
}

/// JSON error body in the `{"message": ...}` shape clients expect
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(status, serde_json::json!({ "message": message }))
}

/// Bodyless response (204 deletes, empty stats)
pub(crate) fn empty_response(status: StatusCode) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::default())
        .unwrap_or_else(|_| {
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Full::default())
                .unwrap()
        })
}

/// Read and parse a JSON request body into a typed payload
pub(crate) async fn read_json_body<T: serde::de::DeserializeOwned>(
    req: Request<Incoming>,
) -> Result<T> {
    let body = req
        .collect()
        .await
        .map_err(|e| TaskdeckError::BadRequest(format!("Failed to read request body: {}", e)))?
        .to_bytes();
    serde_json::from_slice(&body)
        .map_err(|e| TaskdeckError::BadRequest(format!("Invalid JSON: {}", e)))
}
