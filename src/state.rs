use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    CartService, LoginLogService, ProductService, SeaOrmCartService, SeaOrmLoginLogService,
    SeaOrmProductService, SeaOrmUserService, UserService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub user_service: Arc<dyn UserService>,

    pub cart_service: Arc<dyn CartService>,

    pub product_service: Arc<dyn ProductService>,

    pub login_log_service: Arc<dyn LoginLogService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let user_service =
            Arc::new(SeaOrmUserService::new(store.clone())) as Arc<dyn UserService + 'static>;
        let cart_service =
            Arc::new(SeaOrmCartService::new(store.clone())) as Arc<dyn CartService + 'static>;
        let product_service = Arc::new(SeaOrmProductService::new(store.clone()))
            as Arc<dyn ProductService + 'static>;
        let login_log_service = Arc::new(SeaOrmLoginLogService::new(store.clone()))
            as Arc<dyn LoginLogService + 'static>;

        Self {
            config: Arc::new(config),
            store,
            user_service,
            cart_service,
            product_service,
            login_log_service,
        }
    }
}
