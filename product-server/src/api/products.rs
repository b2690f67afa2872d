//! Product API handlers

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use shared::models::{Product, ProductCreate, ProductFilter, ProductUpdate};
use shared::{PageRequest, PaginatedResponse};

use super::extract::JsonBody;
use crate::db::product as repo;
use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list).post(create)).route(
        "/{id}",
        get(get_by_id).put(update).delete(delete),
    )
}

/// Raw list query. Values stay strings so coercion rules live in one place.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub q: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// A path id that is not an integer cannot name a row
fn parse_id(raw: &str) -> Result<i64, ServiceError> {
    raw.parse().map_err(|_| ServiceError::product_not_found())
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductCreate>,
) -> ServiceResult<(StatusCode, Json<CreatedResponse>)> {
    let fields = payload.into_fields()?;
    let id = repo::insert(&state.pool, &fields).await?;
    tracing::info!(product_id = id, "Product created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Created",
            id,
        }),
    ))
}

/// GET /api/products
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> ServiceResult<Json<PaginatedResponse<Product>>> {
    let filter = ProductFilter::from_raw(
        query.q.as_deref(),
        query.min_price.as_deref(),
        query.max_price.as_deref(),
        query.category.as_deref(),
    )?;
    let page = PageRequest::from_raw(query.page.as_deref(), query.limit.as_deref());

    let total = repo::count(&state.pool, &filter).await?;
    let data = repo::find_page(&state.pool, &filter, page).await?;
    Ok(Json(PaginatedResponse::new(data, total, page)))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServiceResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ServiceError::product_not_found)?;
    Ok(Json(product))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ProductUpdate>,
) -> ServiceResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    let fields = payload.into_fields()?;
    if !repo::update(&state.pool, id, &fields).await? {
        return Err(ServiceError::product_not_found());
    }
    tracing::info!(product_id = id, "Product updated");
    Ok(Json(MessageResponse { message: "Updated" }))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServiceResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    if !repo::delete(&state.pool, id).await? {
        return Err(ServiceError::product_not_found());
    }
    tracing::info!(product_id = id, "Product deleted");
    Ok(Json(MessageResponse { message: "Deleted" }))
}
