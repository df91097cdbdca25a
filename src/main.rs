mod api;
mod controller;
mod dto;
mod fixtures;
mod latency;

use crate::api::{AppConfig, AppServerConfig, app};
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let server_config = AppServerConfig {
        listen: env::args()
            .find_map(|arg| arg.strip_prefix("--listen=").map(String::from))
            .unwrap_or("0.0.0.0:3000".to_string()),
        config_path: env::args()
            .find_map(|arg| arg.strip_prefix("--config-path=").map(PathBuf::from))
            .unwrap_or("config/config.toml".into()),
    };

    let config = AppConfig::load(&server_config.config_path)?;
    info!(
        "responses delayed by {}ms, simulated errors: {:?}",
        config.delay_ms, config.simulated_errors
    );
    let app = app(config);

    // run it
    let listener = tokio::net::TcpListener::bind(&server_config.listen).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            error!("failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await
        }
    }
}
