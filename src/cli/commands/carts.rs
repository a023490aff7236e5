//! Cart item commands
//!
//! Writes are followed by a fresh list from the server.

use anyhow::Context;

use super::admin_client;
use crate::cli::CartFields;
use crate::config::Config;
use crate::db::CartItem;
use crate::models::{CartItemInput, FieldValue};

impl From<CartFields> for CartItemInput {
    fn from(fields: CartFields) -> Self {
        Self {
            user_email: Some(fields.user_email),
            name: Some(fields.name),
            price: Some(FieldValue::from(fields.price.as_str())),
            quantity: Some(FieldValue::from(fields.quantity.as_str())),
            image: fields.image,
        }
    }
}

pub(super) fn print_cart_items(items: &[CartItem]) {
    if items.is_empty() {
        println!("No cart items.");
        return;
    }

    println!("Cart items ({} total)", items.len());
    println!("{:-<70}", "");

    for item in items {
        println!(
            "{} x{} @ {:.2} for {}",
            item.name, item.quantity, item.price, item.user_email
        );
        println!("  ID: {} | Added: {}", item.id, item.created_at);
    }
}

async fn refresh(config: &Config) -> anyhow::Result<()> {
    let items = admin_client(config)?
        .list_carts()
        .await
        .context("Failed to fetch cart items")?;
    println!();
    print_cart_items(&items);
    Ok(())
}

pub async fn cmd_carts_list(config: &Config) -> anyhow::Result<()> {
    refresh(config).await
}

pub async fn cmd_carts_add(config: &Config, fields: CartFields) -> anyhow::Result<()> {
    let item = admin_client(config)?
        .create_cart(&fields.into())
        .await
        .context("Failed to create cart item")?;

    println!("Cart item created: {} ({})", item.name, item.id);
    refresh(config).await
}

pub async fn cmd_carts_update(config: &Config, id: &str, fields: CartFields) -> anyhow::Result<()> {
    let item = admin_client(config)?
        .update_cart(id, &fields.into())
        .await
        .context("Failed to update cart item")?;

    println!("Cart item updated: {} ({})", item.name, item.id);
    refresh(config).await
}

pub async fn cmd_carts_delete(config: &Config, id: &str) -> anyhow::Result<()> {
    let message = admin_client(config)?
        .delete_cart(id)
        .await
        .context("Failed to delete cart item")?;

    println!("{message}");
    refresh(config).await
}
