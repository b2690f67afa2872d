//! API routes

pub mod extract;
pub mod frontend;
pub mod health;
pub mod products;

use axum::Router;
use axum::body::Body;
use axum::extract::MatchedPath;
use axum::middleware as axum_middleware;
use axum::routing::get;
use http::{HeaderName, HeaderValue, Request};
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware;
use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The served application: the router behind trailing-slash trimming
pub type App = NormalizePath<Router>;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/products", products::router())
        .route("/api/health", get(health::health_check))
        .fallback(frontend::serve)
}

/// Build the fully configured application with all middleware and state
///
/// Layers added last run first. Request ids are assigned before anything
/// else sees the request and copied onto the response on the way out.
/// Path trimming wraps the router itself so `/api/products/` routes like
/// `/api/products`.
pub fn build_app(state: AppState) -> App {
    let router = build_router()
        // CORS - any origin
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - one span per request, so handler logs carry the route
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
            let route = req
                .extensions()
                .get::<MatchedPath>()
                .map(MatchedPath::as_str)
                .unwrap_or("fallback");
            let request_id = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "request",
                method = %req.method(),
                route,
                request_id,
            )
        }))
        // Copy the request id onto the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Assign a request id unless the client sent one
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
