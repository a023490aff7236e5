//! User commands

use anyhow::Context;
use std::collections::HashSet;

use super::admin_client;
use crate::clients::AdminApiClient;
use crate::config::Config;
use crate::db::{CartItem, User};

pub(super) fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users.");
        return;
    }

    println!("Users ({} total)", users.len());
    println!("{:-<70}", "");

    for user in users {
        println!("{} <{}> [{}]", user.name, user.email, user.role);
        println!("  ID: {} | Joined: {}", user.id, user.created_at);
    }
}

pub async fn cmd_users_list(config: &Config) -> anyhow::Result<()> {
    let client = admin_client(config)?;
    let users = client.list_users().await.context("Failed to fetch users")?;

    print_users(&users);
    Ok(())
}

/// Cart items whose `userEmail` matches no remaining user.
async fn orphaned_cart_items(client: &AdminApiClient) -> anyhow::Result<Vec<CartItem>> {
    let (users, items) = tokio::try_join!(client.list_users(), client.list_carts())
        .context("Failed to fetch users and cart items")?;

    let emails: HashSet<&str> = users.iter().map(|u| u.email.as_str()).collect();

    Ok(items
        .into_iter()
        .filter(|item| !emails.contains(item.user_email.as_str()))
        .collect())
}

/// Deletes a user, then reports every orphaned cart item left on the server.
/// Orphans are only deleted with `purge_carts`, which also works when the
/// user is already gone.
pub async fn cmd_users_delete(config: &Config, id: &str, purge_carts: bool) -> anyhow::Result<()> {
    let client = admin_client(config)?;

    let message = client
        .delete_user(id)
        .await
        .context("Failed to delete user")?;
    println!("{message}");

    let orphans = orphaned_cart_items(&client).await?;

    if orphans.is_empty() {
        return Ok(());
    }

    if !purge_carts {
        println!("{} cart item(s) belong to no user:", orphans.len());
        for item in &orphans {
            println!("  {} for {} ({})", item.name, item.user_email, item.id);
        }
        println!("Pass --purge-carts to delete them.");
        return Ok(());
    }

    for item in &orphans {
        client
            .delete_cart(&item.id)
            .await
            .with_context(|| format!("Failed to delete cart item {}", item.id))?;
    }

    let remaining = client
        .list_carts()
        .await
        .context("Failed to fetch cart items")?;
    println!(
        "Deleted {} orphaned cart item(s). {} cart item(s) remain.",
        orphans.len(),
        remaining.len()
    );

    Ok(())
}
