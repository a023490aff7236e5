use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::entities::{cart_items, prelude::*};
use crate::models::{CartItemFields, timestamp_now};

pub struct CartRepository {
    conn: DatabaseConnection,
}

impl CartRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All cart items, newest first.
    pub async fn list(&self) -> Result<Vec<cart_items::Model>> {
        CartItems::find()
            .order_by_desc(cart_items::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to query cart items")
    }

    pub async fn get(&self, id: &str) -> Result<Option<cart_items::Model>> {
        CartItems::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query cart item by ID")
    }

    pub async fn create(&self, fields: &CartItemFields) -> Result<cart_items::Model> {
        self.create_at(fields, timestamp_now()).await
    }

    pub async fn create_at(
        &self,
        fields: &CartItemFields,
        created_at: String,
    ) -> Result<cart_items::Model> {
        let active_model = cart_items::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_email: Set(fields.user_email.clone()),
            name: Set(fields.name.clone()),
            price: Set(fields.price),
            quantity: Set(fields.quantity),
            image: Set(fields.image.clone()),
            created_at: Set(created_at),
        };

        active_model
            .insert(&self.conn)
            .await
            .context("Failed to insert cart item")
    }

    /// Replaces every editable field. `None` when the row no longer exists.
    pub async fn replace(
        &self,
        id: &str,
        fields: &CartItemFields,
    ) -> Result<Option<cart_items::Model>> {
        let active_model = cart_items::ActiveModel {
            id: Set(id.to_string()),
            user_email: Set(fields.user_email.clone()),
            name: Set(fields.name.clone()),
            price: Set(fields.price),
            quantity: Set(fields.quantity),
            image: Set(fields.image.clone()),
            ..Default::default()
        };

        match active_model.update(&self.conn).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e).context("Failed to update cart item"),
        }
    }

    /// Returns the number of rows removed (0 when the id is unknown).
    pub async fn delete(&self, id: &str) -> Result<u64> {
        let result = CartItems::delete_by_id(id.to_string())
            .exec(&self.conn)
            .await
            .context("Failed to delete cart item")?;

        Ok(result.rows_affected)
    }
}
