//! User administration endpoints.
//!
//! Handlers only map HTTP to [`UserService`](crate::services::UserService)
//! calls; the admin gate has already run by the time they execute.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::{debug, info};

use super::admin::AdminContext;
use crate::api::{ApiError, AppState, MessageResponse, UsersResponse};
use crate::services::UserError;

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Database(msg) => Self::store(msg),
        }
    }
}

/// `GET /api/admin/users`
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AdminContext>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state
        .user_service()
        .list_users()
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to fetch users"))?;

    debug!(admin = %admin.email, count = users.len(), "Listed users");
    Ok(Json(UsersResponse { users }))
}

/// `DELETE /api/admin/user/{id}`
///
/// Succeeds whether or not the id exists. Cart items owned by the user are
/// left in place.
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AdminContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .user_service()
        .delete_user(&id)
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to delete user"))?;

    info!(admin = %admin.email, user_id = %id, "Admin deleted user");
    Ok(Json(MessageResponse::new("User deleted")))
}
