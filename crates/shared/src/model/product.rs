use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `products` table. `features` holds the serialized JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub brand: Option<String>,
    pub price: Option<String>,
    pub features: Option<String>,
    pub dimensions: Option<String>,
    pub created_at: NaiveDateTime,
}
