//! JSON body extractor
//!
//! Same as `axum::Json`, but a body that cannot be read is answered with
//! the usual `{"error": ...}` body and a 400.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use shared::error::AppError;

pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected request body");
                Err(AppError::invalid_body(rejection.body_text()))
            }
        }
    }
}
