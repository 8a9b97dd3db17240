//! Route definitions for the product catalog.
//!
//! The paths are unversioned (`/products`, not `/api/v1/products`); the
//! wire surface is fixed by the original catalog API.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /products          -> list_products
/// POST   /products          -> create_product (upsert)
/// PUT    /products          -> update_product (upsert)
/// GET    /products/{id}     -> get_product
/// DELETE /products/{id}     -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(product::list_products)
                .post(product::create_product)
                .put(product::update_product),
        )
        .route(
            "/products/{id}",
            get(product::get_product).delete(product::delete_product),
        )
}
