//! Product catalog commands

use anyhow::Context;

use super::admin_client;
use crate::config::Config;
use crate::models::{FieldValue, ProductInput};

pub async fn cmd_products_list(config: &Config, category: Option<&str>) -> anyhow::Result<()> {
    let products = admin_client(config)?
        .list_products(category)
        .await
        .context("Failed to fetch products")?;

    if products.is_empty() {
        match category {
            Some(category) => println!("No products in category '{category}'."),
            None => println!("No products."),
        }
        return Ok(());
    }

    println!("Products ({} total)", products.len());
    println!("{:-<70}", "");

    for product in products {
        println!("{} [{}] {:.2}", product.name, product.category, product.price);
        println!("  ID: {} | Image: {}", product.id, product.image);
    }

    Ok(())
}

pub async fn cmd_products_add(
    config: &Config,
    name: String,
    price: &str,
    image: String,
    category: String,
) -> anyhow::Result<()> {
    let input = ProductInput {
        name: Some(name),
        price: Some(FieldValue::from(price)),
        image: Some(image),
        category: Some(category),
    };

    let product = admin_client(config)?
        .create_product(&input)
        .await
        .context("Failed to create product")?;

    println!("Product created: {} ({})", product.name, product.id);
    Ok(())
}
