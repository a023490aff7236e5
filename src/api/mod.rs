use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{CartService, LoginLogService, ProductService, UserService};
use crate::state::SharedState;

pub mod admin;
mod carts;
mod error;
pub mod extract;
mod logs;
mod observability;
mod products;
mod system;
mod types;
mod users;

pub use admin::{AdminContext, AdminGate};
pub use error::{ApiError, FORBIDDEN_MESSAGE};
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub admin_gate: AdminGate,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.shared.store
    }

    #[must_use]
    pub const fn admin_gate(&self) -> &AdminGate {
        &self.admin_gate
    }

    #[must_use]
    pub fn user_service(&self) -> &Arc<dyn UserService> {
        &self.shared.user_service
    }

    #[must_use]
    pub fn cart_service(&self) -> &Arc<dyn CartService> {
        &self.shared.cart_service
    }

    #[must_use]
    pub fn product_service(&self) -> &Arc<dyn ProductService> {
        &self.shared.product_service
    }

    #[must_use]
    pub fn login_log_service(&self) -> &Arc<dyn LoginLogService> {
        &self.shared.login_log_service
    }
}

pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let admin_gate = AdminGate::from_config(&shared.config.admin)?;

    Ok(Arc::new(AppState {
        shared,
        admin_gate,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    }))
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    create_app_state(shared, prometheus_handle)
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .merge(create_admin_router(state.clone()))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{category}",
            get(products::list_products_by_category),
        )
        .route("/health", get(system::health))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn create_admin_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/users", get(users::list_users))
        .route("/admin/user/{id}", delete(users::delete_user))
        .route("/admin/carts", get(carts::list_carts))
        .route("/admin/cart", post(carts::create_cart))
        .route(
            "/admin/cart/{id}",
            put(carts::update_cart).delete(carts::delete_cart),
        )
        .route("/admin/logs", get(logs::list_logs))
        .route("/admin/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn_with_state(state, admin::admin_gate))
}
