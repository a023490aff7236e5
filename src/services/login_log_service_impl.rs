//! `SeaORM` implementation of the `LoginLogService` trait.

use async_trait::async_trait;

use crate::db::{LoginLog, Store};
use crate::services::login_log_service::{LoginLogError, LoginLogService};

pub struct SeaOrmLoginLogService {
    store: Store,
}

impl SeaOrmLoginLogService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LoginLogService for SeaOrmLoginLogService {
    async fn list_logs(&self) -> Result<Vec<LoginLog>, LoginLogError> {
        Ok(self.store.list_login_logs().await?)
    }
}
