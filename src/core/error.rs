//! Error type system for the records API
//!
//! Every failure a request can hit is one of four kinds, each with a fixed
//! HTTP status. The boundary translation lives in the `IntoResponse` impl so
//! handlers only ever return `Result<_, RecordError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main error type for record operations
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    StorageError(String),
}

impl RecordError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordError::Unauthorized => StatusCode::UNAUTHORIZED,
            RecordError::ValidationError(_) => StatusCode::BAD_REQUEST,
            RecordError::NotFound(_) => StatusCode::NOT_FOUND,
            RecordError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type name used in logs
    pub fn error_type(&self) -> &'static str {
        match self {
            RecordError::Unauthorized => "Unauthorized",
            RecordError::ValidationError(_) => "ValidationError",
            RecordError::NotFound(_) => "NotFoundError",
            RecordError::StorageError(_) => "StorageError",
        }
    }

    /// Shorthand for the not-found error every record lookup produces
    pub fn record_not_found() -> Self {
        RecordError::NotFound("Record not found".to_string())
    }
}

impl From<rusqlite::Error> for RecordError {
    fn from(err: rusqlite::Error) -> Self {
        RecordError::StorageError(err.to_string())
    }
}

impl From<r2d2::Error> for RecordError {
    fn from(err: r2d2::Error) -> Self {
        RecordError::StorageError(err.to_string())
    }
}

/// Error envelope returned by every failing endpoint: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn from_error(error: &RecordError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(
                error_type = self.error_type(),
                status_code = %status_code,
                "Request failed: {}",
                self
            );
        } else {
            tracing::warn!(
                error_type = self.error_type(),
                status_code = %status_code,
                "Request rejected: {}",
                self
            );
        }

        (status_code, Json(ErrorResponse::from_error(&self))).into_response()
    }
}

/// Result type alias for operations that can fail with RecordError
pub type Result<T> = std::result::Result<T, RecordError>;
