mod api;
mod product;

pub use self::api::{MessageResponse, UploadResponse};
pub use self::product::ProductResponse;
