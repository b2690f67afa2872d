//! Handler error type
//!
//! Handlers return [`ServiceResult`]. Storage failures and request errors
//! both convert with `?`, and the HTTP mapping happens once, in
//! `IntoResponse`.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub enum ServiceError {
    /// sqlx or repository failure; answered with a generic 500
    Db(BoxError),
    /// Already classified (404, 400, ...); its message reaches the client
    App(AppError),
}

impl ServiceError {
    /// No product has the requested id
    pub fn product_not_found() -> Self {
        ServiceError::App(AppError::new(ErrorCode::ProductNotFound))
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            // The detail is logged by AppError's IntoResponse, inside the request span
            ServiceError::Db(db_err) => AppError::database(db_err.to_string()),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        AppError::from(self).into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
