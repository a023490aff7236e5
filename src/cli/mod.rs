//! Command-line interface for shopkeep.
//!
//! `serve`, `init` and `seed` work locally; everything else talks to a
//! running server through [`AdminApiClient`](crate::clients::AdminApiClient).

mod commands;

use clap::{Args, Parser, Subcommand};

/// shopkeep - admin backend for a small storefront
#[derive(Parser)]
#[command(name = "shopkeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server until Ctrl+C
    #[command(alias = "server")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Insert demo users, products and login logs into the local store
    Seed,

    /// Show users, cart items and login logs from a running server
    #[command(alias = "dash")]
    Dashboard,

    /// Manage users
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage cart items
    Carts {
        #[command(subcommand)]
        command: CartCommands,
    },

    /// Browse and add products
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },

    /// Show recent login attempts
    Logs,
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    #[command(alias = "ls")]
    List,
    /// Delete a user by id
    #[command(alias = "rm")]
    Delete {
        /// User id
        id: String,
        /// Also delete the cart items left behind by the user
        #[arg(long)]
        purge_carts: bool,
    },
}

/// Every editable cart field. Updates replace all of them.
#[derive(Args)]
pub struct CartFields {
    /// Email of the user who owns the item
    #[arg(long)]
    pub user_email: String,
    /// Item name
    #[arg(long)]
    pub name: String,
    /// Unit price, must be positive
    #[arg(long)]
    pub price: String,
    /// Quantity, must be a positive integer
    #[arg(long)]
    pub quantity: String,
    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Subcommand)]
pub enum CartCommands {
    /// List all cart items
    #[command(alias = "ls")]
    List,
    /// Add a cart item for an existing user
    Add {
        #[command(flatten)]
        fields: CartFields,
    },
    /// Replace a cart item
    Update {
        /// Cart item id
        id: String,
        #[command(flatten)]
        fields: CartFields,
    },
    /// Delete a cart item
    #[command(alias = "rm")]
    Delete {
        /// Cart item id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ProductCommands {
    /// List products, optionally in one category
    #[command(alias = "ls")]
    List {
        /// Exact category name
        #[arg(long)]
        category: Option<String>,
    },
    /// Add a product to the catalog
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        image: String,
        #[arg(long)]
        category: String,
    },
}

pub use commands::*;
