use crate::{extraction::normalizer::features_from_column, model::Product as ProductModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i64,
    pub product_name: String,
    pub brand: Option<String>,
    pub price: Option<String>,
    pub features: Vec<String>,
    pub dimensions: Option<String>,
    pub created_at: String,
}

// dari model to response
impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            product_name: value.product_name,
            brand: value.brand,
            price: value.price,
            features: features_from_column(value.features.as_deref()),
            dimensions: value.dimensions,
            created_at: value.created_at.to_string(),
        }
    }
}
