//! Handlers for the product catalog endpoints.
//!
//! Every handler is a direct pass-through to [`ProductService`]; there is
//! no validation and no business logic here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::types::ProductId;
use catalog_db::models::product::Product;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /products
///
/// List all products.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = state.service.list().await?;

    Ok(Json(products))
}

/// GET /products/{id}
///
/// Fetch a single product by id.
///
/// A missing id yields the default-valued product (`pId: 0`, `pName:
/// null`, `pPrice: 0`) with a 200 status rather than a 404. This masking
/// is part of the inherited wire contract; clients distinguish "absent"
/// by the zero id.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<impl IntoResponse> {
    let product = state.service.get(id).await?.unwrap_or_default();

    Ok(Json(product))
}

/// POST /products
///
/// Upsert a product keyed by its caller-supplied id. Returns 200 with an
/// empty body.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<Product>,
) -> AppResult<impl IntoResponse> {
    state.service.upsert(&input).await?;

    tracing::info!(product_id = input.id, "Product upserted");

    Ok(StatusCode::OK)
}

/// PUT /products
///
/// Full-record replace keyed by id. Functionally identical to
/// [`create_product`]; both routes share upsert semantics.
pub async fn update_product(
    State(state): State<AppState>,
    Json(input): Json<Product>,
) -> AppResult<impl IntoResponse> {
    state.service.upsert(&input).await?;

    tracing::info!(product_id = input.id, "Product upserted");

    Ok(StatusCode::OK)
}

/// DELETE /products/{id}
///
/// Remove a product. Deleting an id that does not exist is a silent
/// no-op; the response is 200 with an empty body either way.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.service.delete(id).await?;

    tracing::info!(product_id = id, deleted, "Product delete requested");

    Ok(StatusCode::OK)
}
