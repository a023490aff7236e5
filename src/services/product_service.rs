//! Domain service for the public product catalogue.

use thiserror::Error;

use crate::db::Product;
use crate::models::{FieldError, ProductInput};

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("{0}")]
    Validation(#[from] FieldError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ProductError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait ProductService: Send + Sync {
    /// Lists every product, newest first.
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Lists products whose category matches exactly, newest first.
    async fn list_products_by_category(&self, category: &str)
    -> Result<Vec<Product>, ProductError>;

    /// Creates a product once all four fields are present.
    async fn create_product(&self, input: &ProductInput) -> Result<Product, ProductError>;
}
