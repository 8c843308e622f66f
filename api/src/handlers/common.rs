//! Shared handler types

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// JSON error body for malformed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: i64,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    /// 400 response for a request that failed validation
    pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(Self::new("VALIDATION_ERROR", message)),
        )
    }
}
