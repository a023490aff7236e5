pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{CartCommands, Commands, ProductCommands, UserCommands};
pub use config::Config;

/// Writes `config.toml` with defaults unless one exists. Needs no loaded
/// config, so it works when the current file is broken.
pub fn init_config() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!("Created config.toml with default settings.");
    } else {
        println!("config.toml already exists.");
    }
    Ok(())
}

/// Runs a parsed command with an already loaded and validated config.
pub async fn run(command: Commands, config: Config) -> anyhow::Result<()> {
    init_tracing(&config)?;

    match command {
        Commands::Serve => {
            let prometheus_handle = install_metrics_recorder(&config)?;
            run_server(config, prometheus_handle).await
        }

        Commands::Init => init_config(),

        Commands::Seed => cli::cmd_seed(&config).await,

        Commands::Dashboard => cli::cmd_dashboard(&config).await,

        Commands::Users { command } => match command {
            UserCommands::List => cli::cmd_users_list(&config).await,
            UserCommands::Delete { id, purge_carts } => {
                cli::cmd_users_delete(&config, &id, purge_carts).await
            }
        },

        Commands::Carts { command } => match command {
            CartCommands::List => cli::cmd_carts_list(&config).await,
            CartCommands::Add { fields } => cli::cmd_carts_add(&config, fields).await,
            CartCommands::Update { id, fields } => {
                cli::cmd_carts_update(&config, &id, fields).await
            }
            CartCommands::Delete { id } => cli::cmd_carts_delete(&config, &id).await,
        },

        Commands::Products { command } => match command {
            ProductCommands::List { category } => {
                cli::cmd_products_list(&config, category.as_deref()).await
            }
            ProductCommands::Add {
                name,
                price,
                image,
                category,
            } => cli::cmd_products_add(&config, name, &price, image, category).await,
        },

        Commands::Logs => cli::cmd_logs(&config).await,
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = if config.observability.json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let loki_layer = if config.observability.loki_enabled {
        let url = url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let (layer, task) = tracing_loki::builder()
            .label("app", "shopkeep")?
            .extra_field("version", env!("CARGO_PKG_VERSION"))?
            .build_url(url)?;

        tokio::spawn(task);
        Some(layer)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(loki_layer)
        .init();

    if config.observability.loki_enabled {
        info!(
            "Loki logging initialized at {}",
            config.observability.loki_url
        );
    }

    Ok(())
}

fn install_metrics_recorder(config: &Config) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics recorder initialized");

    Ok(Some(handle))
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let admin_email = config.admin.email.clone();

    let state = api::create_app_state_from_config(config, prometheus_handle).await?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(admin = %admin_email, "Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
