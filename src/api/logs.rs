use axum::{Extension, Json, extract::State};
use std::sync::Arc;
use tracing::debug;

use super::admin::AdminContext;
use crate::api::{ApiError, AppState, LogsResponse};
use crate::services::LoginLogError;

impl From<LoginLogError> for ApiError {
    fn from(err: LoginLogError) -> Self {
        match err {
            LoginLogError::Database(msg) => Self::store(msg),
        }
    }
}

/// `GET /api/admin/logs`: login attempts, newest first.
pub async fn list_logs(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AdminContext>,
) -> Result<Json<LogsResponse>, ApiError> {
    let logs = state
        .login_log_service()
        .list_logs()
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to fetch logs"))?;

    debug!(admin = %admin.email, count = logs.len(), "Listed login logs");
    Ok(Json(LogsResponse { logs }))
}
