mod client;
pub mod image;
pub mod normalizer;
pub mod parser;
mod prompt;

pub use self::client::GeminiClient;
pub use self::image::{ValidatedImage, validate_image};
pub use self::normalizer::{RawFeatures, normalize_features, normalize_product};
pub use self::parser::parse_model_output;
pub use self::prompt::PRODUCT_EXTRACTION_PROMPT;
