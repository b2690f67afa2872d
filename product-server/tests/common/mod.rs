#![allow(dead_code)]

use axum::body::Body;
use http::{Request, Response, header};
use http_body_util::BodyExt;
use product_server::api::{self, App};
use product_server::AppState;
use sqlx::MySqlPool;
use std::path::Path;
use tower::ServiceExt;

/// Send one request through a freshly built app
pub async fn send(app: &App, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("app is infallible")
}

pub fn app(pool: MySqlPool, static_dir: impl AsRef<Path>) -> App {
    api::build_app(AppState::from_pool(pool, static_dir.as_ref()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
