//! Response types and error handling for API endpoints
//!
//! Every handler failure becomes `500 {"error": "<message>"}`; callers get
//! the underlying message verbatim and no machine-readable code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use users_core::StoreError;

/// Confirmation returned by the delete endpoint
pub const USER_DELETED_MESSAGE: &str = "Usuario eliminado";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    ///
    /// Client and store failures are not distinguished.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Store(e) => e.code(),
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        error!(code = self.error_code(), error = %self, "Request failed");

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

/// Plain `{"message": ...}` body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn user_deleted() -> Self {
        Self {
            message: USER_DELETED_MESSAGE,
        }
    }
}
