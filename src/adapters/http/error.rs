//! Error responses for the HTTP API.
//!
//! Only validation and storage failures become HTTP errors. Denied access,
//! demo fallbacks and purchase failures are ordinary 200 bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::StorageError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = (!err.details.is_empty())
            .then(|| serde_json::to_value(&err.details).ok())
            .flatten();
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

/// API error wrapper mapping domain errors to status codes.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.code {
            ErrorCode::EmptyField | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::StorageError => {
                tracing::error!(error = %self.0, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}
