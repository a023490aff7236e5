use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::{login_logs, prelude::*};
use crate::models::{NewLoginLog, timestamp_now};

pub struct LoginLogRepository {
    conn: DatabaseConnection,
}

impl LoginLogRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All login attempts, most recent first.
    pub async fn list(&self) -> Result<Vec<login_logs::Model>> {
        LoginLogs::find()
            .order_by_desc(login_logs::Column::Timestamp)
            .all(&self.conn)
            .await
            .context("Failed to query login logs")
    }

    pub async fn record(&self, entry: &NewLoginLog) -> Result<login_logs::Model> {
        self.record_at(entry, timestamp_now()).await
    }

    pub async fn record_at(
        &self,
        entry: &NewLoginLog,
        timestamp: String,
    ) -> Result<login_logs::Model> {
        let active_model = login_logs::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            email: Set(entry.email.clone()),
            success: Set(entry.success),
            ip: Set(entry.ip.clone()),
            user_agent: Set(entry.user_agent.clone()),
            timestamp: Set(timestamp),
        };

        active_model
            .insert(&self.conn)
            .await
            .context("Failed to insert login log")
    }
}
