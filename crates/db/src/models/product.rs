//! Product entity model.

use catalog_core::types::ProductId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
///
/// The JSON field names (`pId`, `pName`, `pPrice`) are a fixed wire
/// contract inherited from the original catalog API; do not rename them.
/// The same struct serves as the request body for create/update, since
/// both carry the full record including the caller-supplied id.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "pId")]
    pub id: ProductId,
    #[serde(rename = "pName")]
    pub name: Option<String>,
    #[serde(rename = "pPrice")]
    pub price: i32,
}
