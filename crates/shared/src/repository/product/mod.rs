mod command;
mod query;

use self::{command::ProductCommandRepository, query::ProductQueryRepository};
use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository},
    config::ConnectionPool,
};
use std::{fmt, sync::Arc};

/// Read and write halves of the `products` table, sharing one pool.
#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl fmt::Debug for ProductRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductRepository").finish_non_exhaustive()
    }
}

impl ProductRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            query: Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository,
            command: Arc::new(ProductCommandRepository::new(pool)) as DynProductCommandRepository,
        }
    }
}
