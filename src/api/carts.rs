//! Cart item administration endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info};

use super::admin::AdminContext;
use super::extract::ValidatedJson;
use crate::api::{ApiError, AppState, ItemResponse, ItemsResponse, MessageResponse};
use crate::models::CartItemInput;
use crate::services::CartError;

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::Validation(e) => Self::validation(e.to_string()),
            e @ (CartError::UserNotFound(_) | CartError::CartItemNotFound(_)) => {
                Self::not_found(e.to_string())
            }
            CartError::Database(msg) => Self::store(msg),
        }
    }
}

/// `GET /api/admin/carts`
pub async fn list_carts(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AdminContext>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let items = state
        .cart_service()
        .list_carts()
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to fetch cart items"))?;

    debug!(admin = %admin.email, count = items.len(), "Listed cart items");
    Ok(Json(ItemsResponse { items }))
}

/// `POST /api/admin/cart`
pub async fn create_cart(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AdminContext>,
    ValidatedJson(input): ValidatedJson<CartItemInput>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item = state
        .cart_service()
        .create_cart(&input)
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to create cart item"))?;

    info!(
        admin = %admin.email,
        item_id = %item.id,
        user_email = %item.user_email,
        "Admin created cart item"
    );

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            message: "Cart item created successfully".to_string(),
            item,
        }),
    ))
}

/// `PUT /api/admin/cart/{id}`
///
/// Full replacement: every editable field must be supplied again.
pub async fn update_cart(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AdminContext>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<CartItemInput>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state
        .cart_service()
        .update_cart(&id, &input)
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to update cart item"))?;

    info!(admin = %admin.email, item_id = %item.id, "Admin updated cart item");

    Ok(Json(ItemResponse {
        message: "Cart item updated successfully".to_string(),
        item,
    }))
}

/// `DELETE /api/admin/cart/{id}`
pub async fn delete_cart(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AdminContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .cart_service()
        .delete_cart(&id)
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to delete cart item"))?;

    info!(admin = %admin.email, item_id = %id, "Admin deleted cart item");
    Ok(Json(MessageResponse::new("Cart item deleted")))
}
