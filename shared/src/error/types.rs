//! Error types and the JSON error body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to clients for every system-category error.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Application error with structured error code
///
/// The code decides the HTTP status; the message is what a client sees,
/// except for system errors whose message only reaches the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// System errors never expose their message to the caller
    pub fn is_system(&self) -> bool {
        matches!(self.code.category(), ErrorCategory::System)
    }

    /// The message placed in the response body
    pub fn public_message(&self) -> &str {
        if self.is_system() {
            GENERIC_SERVER_ERROR
        } else {
            &self.message
        }
    }

    // ==================== Convenience constructors ====================

    /// A required field was missing or blank
    pub fn required(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
    }

    /// A value could not be coerced to the expected type
    pub fn invalid_format(field: &str, expected: &str) -> Self {
        Self::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be {expected}"),
        )
    }

    /// The request body was not the JSON the endpoint expects
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Error body: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.public_message().to_string(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::from(&self);

        // Log system errors
        if self.is_system() {
            tracing::error!(
                code = %self.code,
                category = self.code.category().name(),
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}
