mod bootstrap;
mod health;

use anyhow::Result;
use counsel_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use counsel_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config).await?;

    health::spawn(&app.config.server.bind_address, app.config.server.health_check_port).await?;

    tracing::info!(
        event_name = "system.server.slack_transport_mode",
        transport_mode = app.slack_runner.transport_mode(),
        correlation_id = "bootstrap",
        "slack runner transport mode initialized"
    );

    app.slack_runner.start().await?;

    tracing::info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        "counsel-server started"
    );
    wait_for_shutdown().await?;
    tracing::info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        "counsel-server stopping"
    );

    Ok(())
}

async fn wait_for_shutdown() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
