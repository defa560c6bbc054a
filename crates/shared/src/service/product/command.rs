use crate::{
    abstract_trait::{DynExtractionClient, DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{requests::UpdateProductRequest, responses::ProductResponse},
    errors::ServiceError,
    extraction::{normalize_product, parse_model_output, validate_image},
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{Instrument, error, info};

pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub extractor: DynExtractionClient,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(
        command: DynProductCommandRepository,
        extractor: DynExtractionClient,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            registry,
            "product_command_service",
            "ProductCommandService",
        );

        Self {
            command,
            extractor,
            metrics,
        }
    }

    fn start_tracing(&self, operation_name: &str) -> TracingContext {
        let span = tracing::info_span!(
            "product_command_service",
            operation = operation_name,
            component = "product"
        );

        info!(parent: &span, "Starting operation: {operation_name}");

        TracingContext {
            span,
            start_time: Instant::now(),
        }
    }

    fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        let status = if is_success {
            info!(parent: &tracing_ctx.span, duration_secs = elapsed, "✅ Operation completed successfully: {message}");
            StatusUtils::Success
        } else {
            error!(parent: &tracing_ctx.span, duration_secs = elapsed, "❌ Operation failed: {message}");
            StatusUtils::Error
        };

        self.metrics.record(method, status, elapsed);
    }

    /// Image Validator → Extraction Client → Response Parser → Field
    /// Normalizer → store.
    async fn run_pipeline(&self, image: Vec<u8>) -> Result<ProductResponse, ServiceError> {
        let image = validate_image(image)?;

        let raw_output = self.extractor.extract(&image).await?;

        let fields = parse_model_output(&raw_output).inspect_err(|_| {
            error!("❌ Model output did not contain a JSON object");
        })?;

        let product = normalize_product(&fields);

        let model = self.command.create_product(&product).await?;

        Ok(ProductResponse::from(model))
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn upload_product(&self, image: Vec<u8>) -> Result<ProductResponse, ServiceError> {
        info!("📸 Extracting product from uploaded image ({} bytes)", image.len());

        let tracing_ctx = self.start_tracing("upload_product");

        let result = self
            .run_pipeline(image)
            .instrument(tracing_ctx.span.clone())
            .await;

        match &result {
            Ok(product) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Post,
                    true,
                    &format!("Product {} extracted and stored", product.id),
                );
            }
            Err(err) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Post,
                    false,
                    &format!("Failed to extract product: {err}"),
                );
            }
        }

        result
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<(), ServiceError> {
        info!("🔄 Updating product ID={id}");

        let tracing_ctx = self.start_tracing("update_product");

        match self
            .command
            .update_product(id, req)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(()) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Put,
                    true,
                    "Product updated successfully",
                );
                Ok(())
            }
            Err(err) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Put,
                    false,
                    &format!("Failed to update product: {err}"),
                );
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID={id}");

        let tracing_ctx = self.start_tracing("delete_product");

        match self
            .command
            .delete_product(id)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(()) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Delete,
                    true,
                    "Product deleted successfully",
                );
                Ok(())
            }
            Err(err) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Delete,
                    false,
                    &format!("Failed to delete product: {err}"),
                );
                Err(ServiceError::Repo(err))
            }
        }
    }
}
