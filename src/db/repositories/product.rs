use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{prelude::*, products};
use crate::models::{NewProduct, timestamp_now};

pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, category: Option<&str>) -> Result<Vec<products::Model>> {
        let mut query = Products::find().order_by_desc(products::Column::CreatedAt);

        if let Some(category) = category {
            query = query.filter(products::Column::Category.eq(category));
        }

        query
            .all(&self.conn)
            .await
            .context("Failed to query products")
    }

    pub async fn create(&self, product: &NewProduct) -> Result<products::Model> {
        self.create_at(product, timestamp_now()).await
    }

    pub async fn create_at(
        &self,
        product: &NewProduct,
        created_at: String,
    ) -> Result<products::Model> {
        let active_model = products::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(product.name.clone()),
            price: Set(product.price),
            image: Set(product.image.clone()),
            category: Set(product.category.clone()),
            created_at: Set(created_at),
        };

        active_model
            .insert(&self.conn)
            .await
            .context("Failed to insert product")
    }
}
