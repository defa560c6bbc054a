use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// Normalized product fields ready to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Motorola Moto G Power (2023)")]
    pub product_name: String,

    #[schema(example = "Motorola")]
    pub brand: String,

    #[schema(example = "₹12,999")]
    pub price: String,

    pub features: Vec<String>,

    #[schema(example = "167.3 x 76.4 x 9.3 mm")]
    pub dimensions: String,
}

/// Full-record replacement. Omitted fields are stored as null; the store
/// rejects a null `product_name` only for a row that exists.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    #[schema(example = "Updated Product Name")]
    pub product_name: Option<String>,

    #[serde(default)]
    #[schema(example = "Updated Brand")]
    pub brand: Option<String>,

    #[serde(default)]
    #[schema(example = "$199.99")]
    pub price: Option<String>,

    /// A list, a JSON-encoded list, a comma-separated string or a single value.
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub features: Option<Value>,

    #[serde(default)]
    #[schema(example = "100mm x 200mm")]
    pub dimensions: Option<String>,
}
