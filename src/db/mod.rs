use crate::entities::{cart_items, login_logs, products, users};
use crate::models::{CartItemFields, NewLoginLog, NewProduct, NewUser};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use crate::entities::cart_items::Model as CartItem;
pub use crate::entities::login_logs::Model as LoginLog;
pub use crate::entities::products::Model as Product;
pub use crate::entities::users::Model as User;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Every pooled connection to `:memory:` would be a separate database
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        if !in_memory {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn cart_repo(&self) -> repositories::cart::CartRepository {
        repositories::cart::CartRepository::new(self.conn.clone())
    }

    fn product_repo(&self) -> repositories::product::ProductRepository {
        repositories::product::ProductRepository::new(self.conn.clone())
    }

    fn login_log_repo(&self) -> repositories::login_log::LoginLogRepository {
        repositories::login_log::LoginLogRepository::new(self.conn.clone())
    }

    // Users

    pub async fn list_users(&self) -> Result<Vec<users::Model>> {
        self.user_repo().list().await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<users::Model>> {
        self.user_repo().get_by_email(email).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<users::Model> {
        self.user_repo().create(user).await
    }

    pub async fn create_user_at(&self, user: &NewUser, created_at: String) -> Result<users::Model> {
        self.user_repo().create_at(user, created_at).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<u64> {
        self.user_repo().delete(id).await
    }

    // Cart items

    pub async fn list_cart_items(&self) -> Result<Vec<cart_items::Model>> {
        self.cart_repo().list().await
    }

    pub async fn get_cart_item(&self, id: &str) -> Result<Option<cart_items::Model>> {
        self.cart_repo().get(id).await
    }

    pub async fn create_cart_item(&self, fields: &CartItemFields) -> Result<cart_items::Model> {
        self.cart_repo().create(fields).await
    }

    pub async fn create_cart_item_at(
        &self,
        fields: &CartItemFields,
        created_at: String,
    ) -> Result<cart_items::Model> {
        self.cart_repo().create_at(fields, created_at).await
    }

    pub async fn replace_cart_item(
        &self,
        id: &str,
        fields: &CartItemFields,
    ) -> Result<Option<cart_items::Model>> {
        self.cart_repo().replace(id, fields).await
    }

    pub async fn delete_cart_item(&self, id: &str) -> Result<u64> {
        self.cart_repo().delete(id).await
    }

    // Products

    pub async fn list_products(&self) -> Result<Vec<products::Model>> {
        self.product_repo().list(None).await
    }

    pub async fn list_products_in_category(&self, category: &str) -> Result<Vec<products::Model>> {
        self.product_repo().list(Some(category)).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<products::Model> {
        self.product_repo().create(product).await
    }

    pub async fn create_product_at(
        &self,
        product: &NewProduct,
        created_at: String,
    ) -> Result<products::Model> {
        self.product_repo().create_at(product, created_at).await
    }

    // Login logs

    pub async fn list_login_logs(&self) -> Result<Vec<login_logs::Model>> {
        self.login_log_repo().list().await
    }

    pub async fn record_login(&self, entry: &NewLoginLog) -> Result<login_logs::Model> {
        self.login_log_repo().record(entry).await
    }

    pub async fn record_login_at(
        &self,
        entry: &NewLoginLog,
        timestamp: String,
    ) -> Result<login_logs::Model> {
        self.login_log_repo().record_at(entry, timestamp).await
    }
}
