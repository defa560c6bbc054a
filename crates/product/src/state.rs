use crate::di::{DependenciesInject, DependenciesInjectDeps};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynExtractionClient,
    config::{Config, ConnectionPool},
    extraction::GeminiClient,
};
use std::{fmt, path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub max_upload_bytes: usize,
    pub static_dir: PathBuf,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let extractor = Arc::new(
            GeminiClient::new(config.gemini.clone()).context("Failed to create Gemini client")?,
        ) as DynExtractionClient;

        let mut state = Self::with_extractor(pool, extractor, config.max_upload_bytes);
        state.static_dir = PathBuf::from(&config.static_dir);

        Ok(state)
    }

    /// State around any extraction client; the web UI is read from `./static`.
    pub fn with_extractor(
        pool: ConnectionPool,
        extractor: DynExtractionClient,
        max_upload_bytes: usize,
    ) -> Self {
        let mut registry = Registry::default();

        let deps = DependenciesInjectDeps { pool, extractor };
        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            max_upload_bytes,
            static_dir: PathBuf::from("static"),
        }
    }
}
