//! `SeaORM` implementation of the `CartService` trait.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::db::{CartItem, Store};
use crate::models::CartItemInput;
use crate::services::cart_service::{CartError, CartService};

pub struct SeaOrmCartService {
    store: Store,
}

impl SeaOrmCartService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn ensure_user_exists(&self, email: &str) -> Result<(), CartError> {
        match self.store.get_user_by_email(email).await? {
            Some(_) => Ok(()),
            None => Err(CartError::UserNotFound(email.to_string())),
        }
    }
}

#[async_trait]
impl CartService for SeaOrmCartService {
    async fn list_carts(&self) -> Result<Vec<CartItem>, CartError> {
        Ok(self.store.list_cart_items().await?)
    }

    async fn create_cart(&self, input: &CartItemInput) -> Result<CartItem, CartError> {
        let fields = input.validate()?;

        self.ensure_user_exists(&fields.user_email).await?;

        let item = self.store.create_cart_item(&fields).await?;

        info!(
            cart_item_id = %item.id,
            user_email = %item.user_email,
            "Cart item created"
        );

        Ok(item)
    }

    async fn update_cart(&self, id: &str, input: &CartItemInput) -> Result<CartItem, CartError> {
        let fields = input.validate()?;

        if self.store.get_cart_item(id).await?.is_none() {
            return Err(CartError::CartItemNotFound(id.to_string()));
        }

        self.ensure_user_exists(&fields.user_email).await?;

        let item = self
            .store
            .replace_cart_item(id, &fields)
            .await?
            .ok_or_else(|| CartError::CartItemNotFound(id.to_string()))?;

        info!(cart_item_id = %item.id, "Cart item updated");

        Ok(item)
    }

    async fn delete_cart(&self, id: &str) -> Result<(), CartError> {
        let removed = self.store.delete_cart_item(id).await?;

        if removed == 0 {
            debug!(cart_item_id = %id, "Delete requested for unknown cart item");
        } else {
            info!(cart_item_id = %id, "Cart item deleted");
        }

        Ok(())
    }
}
