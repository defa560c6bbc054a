use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::ProductResponse,
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{Instrument, error, info};

pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service", "ProductQueryService");

        Self { query, metrics }
    }

    fn start_tracing(&self, operation_name: &str) -> TracingContext {
        let span = tracing::info_span!(
            "product_query_service",
            operation = operation_name,
            component = "product"
        );

        info!(parent: &span, "Starting operation: {operation_name}");

        TracingContext {
            span,
            start_time: Instant::now(),
        }
    }

    fn complete_tracing(&self, tracing_ctx: &TracingContext, is_success: bool, message: &str) {
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        let status = if is_success {
            info!(parent: &tracing_ctx.span, duration_secs = elapsed, "✅ Operation completed successfully: {message}");
            StatusUtils::Success
        } else {
            error!(parent: &tracing_ctx.span, duration_secs = elapsed, "❌ Operation failed: {message}");
            StatusUtils::Error
        };

        self.metrics.record(Method::Get, status, elapsed);
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let tracing_ctx = self.start_tracing("find_all_products");

        let products = match self
            .query
            .find_all()
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(products) => products,
            Err(err) => {
                self.complete_tracing(&tracing_ctx, false, &format!("Failed to fetch products: {err}"));
                return Err(ServiceError::Repo(err));
            }
        };

        let response: Vec<ProductResponse> =
            products.into_iter().map(ProductResponse::from).collect();

        self.complete_tracing(
            &tracing_ctx,
            true,
            &format!("Fetched {} products", response.len()),
        );

        Ok(response)
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        let tracing_ctx = self.start_tracing("find_product_by_id");

        match self
            .query
            .find_by_id(id)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(Some(product)) => {
                self.complete_tracing(&tracing_ctx, true, &format!("Fetched product {id}"));
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.complete_tracing(&tracing_ctx, false, &format!("Product {id} not found"));
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(err) => {
                self.complete_tracing(
                    &tracing_ctx,
                    false,
                    &format!("Failed to fetch product {id}: {err}"),
                );
                Err(ServiceError::Repo(err))
            }
        }
    }
}
