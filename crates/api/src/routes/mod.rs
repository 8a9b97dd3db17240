pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (mounted at the root).
///
/// ```text
/// /health             service + database health
/// /products           list (GET), upsert (POST, PUT)
/// /products/{id}      fetch (GET), remove (DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(product::router())
}
