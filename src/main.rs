#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use gateway_service::infrastructure::{
    config::{AppConfig, LogFormat, LoggingConfig},
    http::start_server,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    init_tracing(&config.logging);

    info!("Starting Gateway Service in {} mode", config.mode);
    info!(
        "Configuration loaded: server will bind to {}:{}",
        config.server.host, config.server.port
    );

    if let Err(e) = start_server(config).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Initialize structured logging; `RUST_LOG` takes precedence over the configured level
fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("gateway_service={level},tower_http={level}", level = config.level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
        LogFormat::Compact => registry.with(tracing_subscriber::fmt::layer().compact()).init(),
    }
}
