//! Unified error system for the product catalog
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with a code and a message
//! - [`ErrorBody`]: The `{"error": ...}` body every failed request returns
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Product errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ProductNotFound);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//!
//! // System errors keep their detail out of the response body
//! let err = AppError::database("connection reset");
//! assert_eq!(err.public_message(), "Server error");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody, GENERIC_SERVER_ERROR};
