//! Error types for Taskdeck

use hyper::StatusCode;

/// Main error type for Taskdeck operations
#[derive(Debug, thiserror::Error)]
pub enum TaskdeckError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskdeckError {
    /// Convert error to HTTP status code
    ///
    /// `NotFound` maps to 400: the task-update contract reports an absent id
    /// with the same status class as validation failures, and clients depend
    /// on that.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Implement From conversions for common error types

impl From<std::io::Error> for TaskdeckError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for TaskdeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(format!("JSON error: {}", err))
    }
}

impl From<hyper::Error> for TaskdeckError {
    fn from(err: hyper::Error) -> Self {
        Self::Internal(format!("HTTP error: {}", err))
    }
}

/// Result type alias for Taskdeck operations
pub type Result<T> = std::result::Result<T, TaskdeckError>;
