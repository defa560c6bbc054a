use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynExtractionClient,
    config::ConnectionPool,
    repository::ProductRepository,
    service::{ProductService, ProductServiceDeps},
};
use std::fmt;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: ProductService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &self.product_service)
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub extractor: DynExtractionClient,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { pool, extractor } = deps;

        let repository = ProductRepository::new(pool);

        let product_service = ProductService::new(
            ProductServiceDeps {
                query: repository.query,
                command: repository.command,
                extractor,
            },
            registry,
        );

        Self { product_service }
    }
}
