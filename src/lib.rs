pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod models;
pub mod services;

use anyhow::Context;
pub use config::Config;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run(config: Config) -> anyhow::Result<()> {
    init_tracing(&config.general.log_level);

    config.validate()?;

    info!(
        "Series tracker v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let state = match api::create_app_state_from_config(&config).await {
        Ok(state) => state,
        Err(e) => {
            error!("Error connecting to database: {:#}", e);
            return Err(e.context("Failed to initialize database"));
        }
    };

    let port = config.server.port;
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Web server running at http://{}", addr);

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
