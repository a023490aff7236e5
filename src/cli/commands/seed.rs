//! Seed command handler
//!
//! Fills a local store with demo data in place of the registration and login
//! flows that normally create users and login logs.

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::db::Store;
use crate::models::{NewLoginLog, NewProduct, NewUser};

const DEMO_USERS: &[(&str, &str)] = &[
    ("Ada Lovelace", "ada@example.com"),
    ("Grace Hopper", "grace@example.com"),
];

const DEMO_PRODUCTS: &[(&str, f64, &str)] = &[
    ("Mechanical Keyboard", 89.99, "electronics"),
    ("Noise Cancelling Headphones", 199.0, "electronics"),
    ("Denim Jacket", 59.5, "clothing"),
    ("Running Shoes", 120.0, "clothing"),
];

/// Inserts demo records. Users are matched on email and never duplicated;
/// products and login logs are only added to an empty table.
pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
    .context("Failed to open store")?;

    let admin = NewUser::new("Administrator", config.admin.email.clone()).with_role("admin");
    let mut users = vec![admin];
    users.extend(
        DEMO_USERS
            .iter()
            .map(|(name, email)| NewUser::new(*name, *email)),
    );

    let mut created_users = 0;
    for user in &users {
        if store.get_user_by_email(&user.email).await?.is_none() {
            store.create_user(user).await?;
            created_users += 1;
        }
    }

    let mut created_products = 0;
    if store.list_products().await?.is_empty() {
        for (name, price, category) in DEMO_PRODUCTS {
            let product = NewProduct {
                name: (*name).to_string(),
                price: *price,
                image: format!(
                    "https://picsum.photos/seed/{}/400",
                    name.replace(' ', "-").to_lowercase()
                ),
                category: (*category).to_string(),
            };
            store.create_product(&product).await?;
            created_products += 1;
        }
    }

    let mut created_logs = 0;
    if store.list_login_logs().await?.is_empty() {
        let attempts = [
            (config.admin.email.as_str(), true),
            (DEMO_USERS[0].1, false),
            (DEMO_USERS[0].1, true),
        ];
        for (email, success) in attempts {
            store
                .record_login(&NewLoginLog {
                    email: email.to_string(),
                    success,
                    ip: Some("127.0.0.1".to_string()),
                    user_agent: "shopkeep-seed".to_string(),
                })
                .await?;
            created_logs += 1;
        }
    }

    info!(
        users = created_users,
        products = created_products,
        logs = created_logs,
        "Seeded store"
    );
    println!(
        "Seeded {created_users} user(s), {created_products} product(s), \
         {created_logs} login log(s)."
    );

    Ok(())
}
