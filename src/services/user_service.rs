//! Domain service for the user directory as seen by administrators.
//!
//! Users are registered elsewhere; this service only lists and removes them.

use thiserror::Error;

use crate::db::User;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Lists every user, newest first.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Deletes a user by id. Unknown ids are not an error.
    ///
    /// Cart items referencing the user's email are left in place.
    async fn delete_user(&self, id: &str) -> Result<(), UserError>;
}
