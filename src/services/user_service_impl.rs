//! `SeaORM` implementation of the `UserService` trait.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::db::{Store, User};
use crate::services::user_service::{UserError, UserService};

pub struct SeaOrmUserService {
    store: Store,
}

impl SeaOrmUserService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.list_users().await?)
    }

    async fn delete_user(&self, id: &str) -> Result<(), UserError> {
        let removed = self.store.delete_user(id).await?;

        if removed == 0 {
            debug!(user_id = %id, "Delete requested for unknown user");
        } else {
            info!(user_id = %id, "User deleted");
        }

        Ok(())
    }
}
