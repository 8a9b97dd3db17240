//! Repository for the `products` table.

use catalog_core::types::ProductId;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products, ordered by id ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id ASC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Find a product by its caller-supplied id.
    pub async fn find_by_id(pool: &PgPool, id: ProductId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a product, or replace the full row if the id already exists.
    pub async fn upsert(pool: &PgPool, product: &Product) -> Result<(), sqlx::Error> {
        tracing::debug!(product_id = product.id, "Upserting product");
        sqlx::query(
            "INSERT INTO products (id, name, price)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE
             SET name = EXCLUDED.name, price = EXCLUDED.price",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete a product by id. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: ProductId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(
            product_id = id,
            rows = result.rows_affected(),
            "Deleted product"
        );
        Ok(result.rows_affected() > 0)
    }
}
