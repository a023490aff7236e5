//! HTTP client for the admin API.
//!
//! Every call carries the session's identity header. The client keeps no
//! cache: callers re-fetch a collection after changing it.

use reqwest::header::HeaderName;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::api::{
    ErrorBody, HealthResponse, ItemResponse, ItemsResponse, LogsResponse, MessageResponse,
    ProductResponse, ProductsResponse, UsersResponse,
};
use crate::config::Config;
use crate::db::{CartItem, LoginLog, Product, User};
use crate::models::{CartItemInput, ProductInput};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid identity header: {0}")]
    InvalidHeader(String),
}

impl ClientError {
    /// HTTP status of a server-side rejection, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The identity presented to the admin gate.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,

    pub header: HeaderName,
}

impl AdminSession {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            header: HeaderName::from_static("x-user-email"),
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: HeaderName) -> Self {
        self.header = header;
        self
    }
}

/// Everything the dashboard shows on first load.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub users: Vec<User>,

    pub items: Vec<CartItem>,

    pub logs: Vec<LoginLog>,
}

#[derive(Debug, Clone)]
pub struct AdminApiClient {
    client: Client,

    base_url: Url,

    session: AdminSession,
}

impl AdminApiClient {
    pub fn new(
        base_url: &str,
        session: AdminSession,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(concat!("shopkeep/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    /// Builds a client from the `[client]` and `[admin]` config sections.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let header = HeaderName::from_bytes(config.admin.identity_header.as_bytes())
            .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
        let session = AdminSession::new(config.client.email.clone()).with_header(header);

        Self::new(
            &config.client.base_url,
            session,
            Duration::from_secs(config.client.request_timeout_seconds),
        )
    }

    #[must_use]
    pub const fn session(&self) -> &AdminSession {
        &self.session
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => match body.error {
                Some(detail) => format!("{}: {}", body.message, detail),
                None => body.message,
            },
            Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        };

        debug!(status = status.as_u16(), message = %message, "Admin API rejected request");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let response = self
            .client
            .get(self.endpoint(segments)?)
            .header(&self.session.header, &self.session.email)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let response = self
            .client
            .delete(self.endpoint(segments)?)
            .header(&self.session.header, &self.session.email)
            .send()
            .await?;

        Self::decode(response).await
    }

    // Users

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let body: UsersResponse = self.get(&["admin", "users"]).await?;
        Ok(body.users)
    }

    pub async fn delete_user(&self, id: &str) -> Result<String, ClientError> {
        let body: MessageResponse = self.delete(&["admin", "user", id]).await?;
        Ok(body.message)
    }

    // Cart items

    pub async fn list_carts(&self) -> Result<Vec<CartItem>, ClientError> {
        let body: ItemsResponse = self.get(&["admin", "carts"]).await?;
        Ok(body.items)
    }

    pub async fn create_cart(&self, input: &CartItemInput) -> Result<CartItem, ClientError> {
        let response = self
            .client
            .post(self.endpoint(&["admin", "cart"])?)
            .header(&self.session.header, &self.session.email)
            .json(input)
            .send()
            .await?;

        let body: ItemResponse = Self::decode(response).await?;
        Ok(body.item)
    }

    pub async fn update_cart(
        &self,
        id: &str,
        input: &CartItemInput,
    ) -> Result<CartItem, ClientError> {
        let response = self
            .client
            .put(self.endpoint(&["admin", "cart", id])?)
            .header(&self.session.header, &self.session.email)
            .json(input)
            .send()
            .await?;

        let body: ItemResponse = Self::decode(response).await?;
        Ok(body.item)
    }

    pub async fn delete_cart(&self, id: &str) -> Result<String, ClientError> {
        let body: MessageResponse = self.delete(&["admin", "cart", id]).await?;
        Ok(body.message)
    }

    // Login logs

    pub async fn list_logs(&self) -> Result<Vec<LoginLog>, ClientError> {
        let body: LogsResponse = self.get(&["admin", "logs"]).await?;
        Ok(body.logs)
    }

    // Products

    pub async fn list_products(&self, category: Option<&str>) -> Result<Vec<Product>, ClientError> {
        let body: ProductsResponse = match category {
            Some(category) => self.get(&["products", category]).await?,
            None => self.get(&["products"]).await?,
        };
        Ok(body.products)
    }

    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ClientError> {
        let response = self
            .client
            .post(self.endpoint(&["products"])?)
            .json(input)
            .send()
            .await?;

        let body: ProductResponse = Self::decode(response).await?;
        Ok(body.product)
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get(&["health"]).await
    }

    /// Fetches users, cart items and login logs concurrently. Fails as a
    /// whole if any of the three reads fails.
    pub async fn load_dashboard(&self) -> Result<DashboardSnapshot, ClientError> {
        let (users, items, logs) =
            tokio::try_join!(self.list_users(), self.list_carts(), self.list_logs())?;

        Ok(DashboardSnapshot { users, items, logs })
    }
}
