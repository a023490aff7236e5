//! Dashboard command handler

use super::admin_client;
use super::carts::print_cart_items;
use super::logs::print_login_logs;
use super::users::print_users;
use crate::config::Config;

/// Loads all three admin collections at once. Nothing is printed unless all
/// of them arrive.
pub async fn cmd_dashboard(config: &Config) -> anyhow::Result<()> {
    let client = admin_client(config)?;

    let snapshot = match client.load_dashboard().await {
        Ok(snapshot) => snapshot,
        Err(e) => anyhow::bail!("Failed to load dashboard data: {e}"),
    };

    println!(
        "Signed in as {} | {} users, {} cart items, {} login attempts",
        client.session().email,
        snapshot.users.len(),
        snapshot.items.len(),
        snapshot.logs.len()
    );
    println!();
    print_users(&snapshot.users);
    println!();
    print_cart_items(&snapshot.items);
    println!();
    print_login_logs(&snapshot.logs);

    Ok(())
}
