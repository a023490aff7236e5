mod carts;
mod dashboard;
mod logs;
mod products;
mod seed;
mod users;

pub use carts::{cmd_carts_add, cmd_carts_delete, cmd_carts_list, cmd_carts_update};
pub use dashboard::cmd_dashboard;
pub use logs::cmd_logs;
pub use products::{cmd_products_add, cmd_products_list};
pub use seed::cmd_seed;
pub use users::{cmd_users_delete, cmd_users_list};

use anyhow::Context;

use crate::clients::AdminApiClient;
use crate::config::Config;

fn admin_client(config: &Config) -> anyhow::Result<AdminApiClient> {
    AdminApiClient::from_config(config).context("Failed to create admin API client")
}
