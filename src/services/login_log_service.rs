//! Read-only access to the login audit trail.

use thiserror::Error;

use crate::db::LoginLog;

#[derive(Debug, Error)]
pub enum LoginLogError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for LoginLogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for LoginLogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait LoginLogService: Send + Sync {
    /// Lists every login attempt, most recent first.
    async fn list_logs(&self) -> Result<Vec<LoginLog>, LoginLogError>;
}
