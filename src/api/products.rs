//! Product catalog endpoints. These are public; no identity is checked.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::extract::ValidatedJson;
use crate::api::{ApiError, AppState, ProductResponse, ProductsResponse};
use crate::models::ProductInput;
use crate::services::ProductError;

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(e) => Self::validation(e.to_string()),
            ProductError::Database(msg) => Self::store(msg),
        }
    }
}

/// `GET /api/products`
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let products = state
        .product_service()
        .list_products()
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to fetch products"))?;

    Ok(Json(ProductsResponse { products }))
}

/// `GET /api/products/{category}`
///
/// Exact, case-sensitive match. An unknown category yields an empty list.
pub async fn list_products_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let products = state
        .product_service()
        .list_products_by_category(&category)
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to fetch products"))?;

    Ok(Json(ProductsResponse { products }))
}

/// `POST /api/products`
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = state
        .product_service()
        .create_product(&input)
        .await
        .map_err(|e| ApiError::from(e).with_action("Failed to create product"))?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            message: "Product created successfully".to_string(),
            product,
        }),
    ))
}
