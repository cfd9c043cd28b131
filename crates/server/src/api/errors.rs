//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a specific HTTP status code and produces
//! a JSON response body `{"message": "..."}`. Validation failures also carry
//! an `errors` array naming each offending field.

use crate::api::models::{MessageResponse, ValidationResponse};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::member::ValidationError;
use roster_core::storage::StoreError;

/// Body message for every failed id lookup.
pub const MEMBER_NOT_FOUND: &str = "Member not found";

/// Application-level error type that implements `IntoResponse`.
///
/// Each variant maps to an HTTP status code:
/// - `NotFound` → 404
/// - `BadRequest` → 400
/// - `Validation` → 400 (with per-field errors)
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404).
    NotFound(String),
    /// Unreadable request (400).
    BadRequest(String),
    /// Member payload failed validation (400).
    Validation(ValidationError),
}

impl ApiError {
    /// The fixed 404 returned when no member has the requested id.
    pub fn member_not_found() -> Self {
        ApiError::NotFound(MEMBER_NOT_FOUND.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::member_not_found(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse { message })).into_response()
            }
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(MessageResponse { message })).into_response()
            }
            ApiError::Validation(err) => {
                let body = Json(ValidationResponse {
                    message: "Invalid member payload".to_string(),
                    errors: err.issues,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
