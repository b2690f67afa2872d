//! Bundled front-end and SPA fallback

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use shared::error::{AppError, ErrorCode};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Entry file served for any path that is not a static asset
pub const INDEX_FILE: &str = "index.html";

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Fallback for every unmatched route
///
/// Unknown `/api` paths get a JSON 404. Anything else is a file under the
/// static directory, or the entry file so client-side routing can take over.
pub async fn serve(State(state): State<AppState>, req: Request) -> Response {
    if is_api_path(req.uri().path()) {
        return AppError::new(ErrorCode::NotFound).into_response();
    }

    let index = ServeFile::new(state.static_dir.join(INDEX_FILE));
    match ServeDir::new(&state.static_dir)
        .fallback(index)
        .oneshot(req)
        .await
    {
        Ok(res) => res.into_response(),
        Err(e) => match e {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/"));
        assert!(is_api_path("/api/unknown"));
        assert!(!is_api_path("/apis"));
        assert!(!is_api_path("/"));
        assert!(!is_api_path("/products/7"));
    }
}
