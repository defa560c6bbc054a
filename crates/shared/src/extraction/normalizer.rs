//! Fills in missing product fields and coerces `features` into a list of
//! strings, whatever shape the model (or an API client) used for it.

use crate::domain::requests::CreateProductRequest;
use serde_json::{Map, Value};

pub const DEFAULT_PRODUCT_NAME: &str = "Unknown Product";
pub const DEFAULT_BRAND: &str = "Unknown Brand";
pub const NOT_AVAILABLE: &str = "Not available";

/// The shapes a `features` value shows up in.
#[derive(Debug, Clone, PartialEq)]
pub enum RawFeatures {
    Missing,
    List(Vec<Value>),
    Text(String),
    Scalar(Value),
}

impl From<Option<&Value>> for RawFeatures {
    fn from(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => RawFeatures::Missing,
            Some(Value::Array(items)) => RawFeatures::List(items.clone()),
            Some(Value::String(text)) => RawFeatures::Text(text.clone()),
            Some(other) => RawFeatures::Scalar(other.clone()),
        }
    }
}

impl RawFeatures {
    pub fn into_list(self) -> Vec<String> {
        let items: Vec<String> = match self {
            RawFeatures::Missing => Vec::new(),
            RawFeatures::List(items) => items.iter().map(stringify).collect(),
            RawFeatures::Text(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Array(items)) => items.iter().map(stringify).collect(),
                Ok(other) => vec![stringify(&other)],
                Err(_) => text.split(',').map(|part| part.trim().to_string()).collect(),
            },
            RawFeatures::Scalar(value) => vec![stringify(&value)],
        };

        items
            .into_iter()
            .filter(|item| !item.trim().is_empty())
            .collect()
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn scalar_or_default(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(other) => stringify(other),
    }
}

pub fn normalize_features(value: Option<&Value>) -> Vec<String> {
    RawFeatures::from(value).into_list()
}

/// Decodes the `features` column. Anything that is not a JSON array goes
/// through the same coercion as incoming data.
pub fn features_from_column(column: Option<&str>) -> Vec<String> {
    match column {
        None => Vec::new(),
        Some(text) => RawFeatures::Text(text.to_string()).into_list(),
    }
}

pub fn normalize_product(fields: &Map<String, Value>) -> CreateProductRequest {
    CreateProductRequest {
        product_name: scalar_or_default(fields.get("product_name"), DEFAULT_PRODUCT_NAME),
        brand: scalar_or_default(fields.get("brand"), DEFAULT_BRAND),
        price: scalar_or_default(fields.get("price"), NOT_AVAILABLE),
        features: normalize_features(fields.get("features")),
        dimensions: scalar_or_default(fields.get("dimensions"), NOT_AVAILABLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn keeps_complete_record_verbatim() {
        let product = normalize_product(&fields(json!({
            "product_name": "Motorola Moto G Power (2023)",
            "brand": "Motorola",
            "price": "₹12,999",
            "features": ["50MP Quad Pixel camera", "5000mAh battery"],
            "dimensions": "167.3 x 76.4 x 9.3 mm"
        })));

        assert_eq!(product.product_name, "Motorola Moto G Power (2023)");
        assert_eq!(product.brand, "Motorola");
        assert_eq!(product.price, "₹12,999");
        assert_eq!(
            product.features,
            vec!["50MP Quad Pixel camera", "5000mAh battery"]
        );
        assert_eq!(product.dimensions, "167.3 x 76.4 x 9.3 mm");
    }

    #[test]
    fn substitutes_defaults_for_missing_fields() {
        let product = normalize_product(&fields(json!({ "brand": "Nike" })));

        assert_eq!(product.product_name, DEFAULT_PRODUCT_NAME);
        assert_eq!(product.brand, "Nike");
        assert_eq!(product.price, NOT_AVAILABLE);
        assert!(product.features.is_empty());
        assert_eq!(product.dimensions, NOT_AVAILABLE);
    }

    #[test]
    fn null_scalars_get_defaults_and_numbers_are_stringified() {
        let product = normalize_product(&fields(json!({
            "product_name": null,
            "price": 199.5
        })));

        assert_eq!(product.product_name, DEFAULT_PRODUCT_NAME);
        assert_eq!(product.price, "199.5");
    }

    #[test]
    fn features_from_every_shape() {
        assert_eq!(
            normalize_features(Some(&json!(["a", "b"]))),
            vec!["a", "b"]
        );
        assert_eq!(
            normalize_features(Some(&json!(r#"["x", "y"]"#))),
            vec!["x", "y"]
        );
        assert_eq!(
            normalize_features(Some(&json!("a, b, c"))),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            normalize_features(Some(&json!("Updated features"))),
            vec!["Updated features"]
        );
        assert_eq!(normalize_features(Some(&json!(42))), vec!["42"]);
        assert!(normalize_features(None).is_empty());
        assert!(normalize_features(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn json_string_holding_a_scalar_is_wrapped() {
        assert_eq!(normalize_features(Some(&json!("7"))), vec!["7"]);
        assert_eq!(
            normalize_features(Some(&json!(r#""waterproof""#))),
            vec!["waterproof"]
        );
    }

    #[test]
    fn list_elements_are_stringified() {
        assert_eq!(
            normalize_features(Some(&json!(["USB-C", 2, true]))),
            vec!["USB-C", "2", "true"]
        );
    }

    #[test]
    fn never_yields_empty_elements() {
        let inputs = [
            json!(["", "  ", "ok", null]),
            json!(" , a,, ,b ,"),
            json!(r#"["", "z"]"#),
            json!(""),
        ];

        for input in inputs {
            let features = normalize_features(Some(&input));
            assert!(
                features.iter().all(|f| !f.trim().is_empty()),
                "{input} produced {features:?}"
            );
        }
        assert_eq!(normalize_features(Some(&json!(" , a,, ,b ,"))), vec!["a", "b"]);
    }

    #[test]
    fn column_round_trip() {
        let stored = serde_json::to_string(&vec!["one", "two, three"]).unwrap();
        assert_eq!(
            features_from_column(Some(&stored)),
            vec!["one", "two, three"]
        );
        assert!(features_from_column(None).is_empty());
    }
}
