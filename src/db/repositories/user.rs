use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{prelude::*, users};
use crate::models::{NewUser, timestamp_now};

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All users, newest first.
    pub async fn list(&self) -> Result<Vec<users::Model>> {
        Users::find()
            .order_by_desc(users::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to query users")
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<users::Model>> {
        Users::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query user by email")
    }

    pub async fn create(&self, user: &NewUser) -> Result<users::Model> {
        self.create_at(user, timestamp_now()).await
    }

    pub async fn create_at(&self, user: &NewUser, created_at: String) -> Result<users::Model> {
        let active_model = users::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            role: Set(user.role_or_default().to_string()),
            created_at: Set(created_at),
        };

        active_model
            .insert(&self.conn)
            .await
            .with_context(|| format!("Failed to insert user {}", user.email))
    }

    /// Returns the number of rows removed (0 when the id is unknown).
    pub async fn delete(&self, id: &str) -> Result<u64> {
        let result = Users::delete_by_id(id.to_string())
            .exec(&self.conn)
            .await
            .context("Failed to delete user")?;

        Ok(result.rows_affected)
    }
}
