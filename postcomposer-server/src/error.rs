//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use libpostcomposer::ComposerError;
use serde_json::json;

/// Error returned by handlers, rendered as `{"error": message}`
#[derive(Debug)]
pub enum ApiError {
    /// Caller mistake; the message is shown as-is
    BadRequest(String),
    /// Server-side failure; only the fixed message leaves the process
    Internal(&'static str),
}

impl ApiError {
    /// Map a service error, hiding anything that is not the caller's fault
    ///
    /// The underlying cause is logged before it is replaced by `message`.
    pub fn from_service(err: ComposerError, message: &'static str) -> Self {
        if err.is_client_error() {
            return ApiError::BadRequest(match err {
                ComposerError::InvalidInput(msg) | ComposerError::NotFound(msg) => msg,
                other => other.to_string(),
            });
        }

        tracing::error!(error = %err, "{}", message);
        ApiError::Internal(message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
