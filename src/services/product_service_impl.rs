//! `SeaORM` implementation of the `ProductService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::{Product, Store};
use crate::models::ProductInput;
use crate::services::product_service::{ProductError, ProductService};

pub struct SeaOrmProductService {
    store: Store,
}

impl SeaOrmProductService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductService for SeaOrmProductService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.store.list_products().await?)
    }

    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, ProductError> {
        Ok(self.store.list_products_in_category(category).await?)
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, ProductError> {
        let new_product = input.validate()?;
        let product = self.store.create_product(&new_product).await?;

        info!(
            product_id = %product.id,
            category = %product.category,
            "Product created"
        );

        Ok(product)
    }
}
