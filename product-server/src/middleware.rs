//! Access log
//!
//! One line per finished request. The id is read back from the
//! `x-request-id` header, which the request-id layer fills in before this
//! middleware runs.

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::api::REQUEST_ID_HEADER;

fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned()
}

/// `None` for a request that went as expected
fn failure_kind(status: StatusCode) -> Option<&'static str> {
    if status.is_server_error() {
        Some("server error")
    } else if status.is_client_error() {
        Some("client error")
    } else {
        None
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = request_id(req.headers());
    let method = req.method().clone();
    let route = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match failure_kind(response.status()) {
        Some(kind) => tracing::warn!(
            %request_id, %method, %route, status, elapsed_ms,
            "{method} {route} failed with {kind}"
        ),
        None => tracing::info!(%request_id, %method, %route, status, elapsed_ms, "{method} {route}"),
    }

    response
}
