//! HTTP error mapping for the API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::domain::errors::DomainError;

/// Fixed message returned to callers for any upstream or transport
/// failure; the original cause is only logged.
pub const FETCH_FAILURE_MESSAGE: &str =
    "An unexpected error occurred while fetching commits.";

/// API error response: a status code plus a JSON `error` message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingParameters
            | DomainError::InvalidDate(_)
            | DomainError::InvalidDateRange { .. } => Self::bad_request(err.to_string()),
            DomainError::GoalNotSet => Self::not_found(err.to_string()),
            other => {
                // Upstream, network, decode, ceiling, and database
                // failures all surface as the same generic 500.
                error!("commit aggregation failed: {other}");
                Self::internal(FETCH_FAILURE_MESSAGE)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
