//! Domain service for cart items managed by administrators.
//!
//! Every write validates the submitted fields first, then checks that the
//! referenced records exist, and only then touches the store. The existence
//! checks and the write are separate statements; a user removed in between
//! does not undo the write.

use thiserror::Error;

use crate::db::CartItem;
use crate::models::{CartItemInput, FieldError};

#[derive(Debug, Error)]
pub enum CartError {
    #[error("{0}")]
    Validation(#[from] FieldError),

    #[error("User not found with the provided email")]
    UserNotFound(String),

    #[error("Cart item not found")]
    CartItemNotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for CartError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for CartError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait CartService: Send + Sync {
    /// Lists every cart item, newest first.
    async fn list_carts(&self) -> Result<Vec<CartItem>, CartError>;

    /// Creates a cart item for an existing user.
    async fn create_cart(&self, input: &CartItemInput) -> Result<CartItem, CartError>;

    /// Replaces all editable fields of an existing cart item.
    async fn update_cart(&self, id: &str, input: &CartItemInput) -> Result<CartItem, CartError>;

    /// Deletes a cart item by id. Unknown ids are not an error.
    async fn delete_cart(&self, id: &str) -> Result<(), CartError>;
}
