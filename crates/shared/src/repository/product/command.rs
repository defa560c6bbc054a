use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    extraction::normalize_features,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let features = serde_json::to_string(&product.features)?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (product_name, brand, price, features, dimensions, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, product_name, brand, price, features, dimensions, created_at
            "#,
        )
        .bind(&product.product_name)
        .bind(&product.brand)
        .bind(&product.price)
        .bind(features)
        .bind(&product.dimensions)
        .bind(Utc::now().naive_utc())
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create product {}: {:?}",
                product.product_name, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product ID {} ({})",
            result.id, result.product_name
        );
        Ok(result)
    }

    async fn update_product(
        &self,
        id: i64,
        product: &UpdateProductRequest,
    ) -> Result<(), RepositoryError> {
        let features = serde_json::to_string(&normalize_features(product.features.as_ref()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET product_name = ?1,
                brand = ?2,
                price = ?3,
                features = ?4,
                dimensions = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&product.product_name)
        .bind(&product.brand)
        .bind(&product.price)
        .bind(features)
        .bind(&product.dimensions)
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if result.rows_affected() == 0 {
            info!("🔍 Product ID {} not found for update", id);
            return Err(RepositoryError::NotFound);
        }

        info!("🔄 Updated product ID {}", id);
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError> {
        info!("❌ Deleting product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            info!("🔍 Product ID {} not found for delete", id);
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Product ID {} deleted", id);
        Ok(())
    }
}
