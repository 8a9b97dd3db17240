//! Pass-through service between the HTTP handlers and the repository.
//!
//! Each method maps 1:1 to a [`ProductRepo`] call and adds no behaviour
//! of its own; the layer exists for conventional separation of concerns,
//! so handlers never touch the repository directly.

use catalog_core::types::ProductId;
use catalog_db::models::product::Product;
use catalog_db::repositories::ProductRepo;
use catalog_db::DbPool;

/// Forwards product operations to storage.
#[derive(Clone)]
pub struct ProductService {
    pool: DbPool,
}

impl ProductService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All products, in storage order.
    pub async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        ProductRepo::list_all(&self.pool).await
    }

    /// The product with the given id, if any.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, sqlx::Error> {
        ProductRepo::find_by_id(&self.pool, id).await
    }

    /// Create-or-replace keyed by the caller-supplied id.
    pub async fn upsert(&self, product: &Product) -> Result<(), sqlx::Error> {
        ProductRepo::upsert(&self.pool, product).await
    }

    /// Remove the product with the given id. Returns whether a row existed.
    pub async fn delete(&self, id: ProductId) -> Result<bool, sqlx::Error> {
        ProductRepo::delete(&self.pool, id).await
    }
}
