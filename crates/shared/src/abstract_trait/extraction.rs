use crate::{errors::ServiceError, extraction::ValidatedImage};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynExtractionClient = Arc<dyn ExtractionClientTrait + Send + Sync>;

/// External multimodal model. Returns the raw, unstructured text output.
#[async_trait]
pub trait ExtractionClientTrait {
    async fn extract(&self, image: &ValidatedImage) -> Result<String, ServiceError>;
}
