//! Error handling module for the map backend.
//!
//! Maps application errors to HTTP status codes and the `{success, error}`
//! response envelope the frontend expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The hosted record store failed or answered with an error
    Store(String),
    /// Malformed request
    BadRequest(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// User-facing message. Store details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            AppError::Store(_) => "Failed to log visit".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Store(msg) => write!(f, "store error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "bad request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let body = ErrorResponse {
            success: false,
            error: self.message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
