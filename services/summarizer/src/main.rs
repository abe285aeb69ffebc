use anyhow::{Context, Result};
use dotenvy::dotenv;
use shared::telemetry::{self, TelemetryConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use summarizer::{create_app, AppState, Config, OpenAiClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let telemetry_config = TelemetryConfig::from_env("summarizer");
    telemetry::init_telemetry(telemetry_config)?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Refusing to start: {}", e);
            return Err(e.into());
        }
    };

    let provider =
        OpenAiClient::new(&config.provider).context("Failed to create provider HTTP client")?;
    info!(
        "Using summarization model {} at {}",
        provider.model(),
        config.provider.base_url
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;

    let app = create_app(AppState::new(config, Arc::new(provider)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Summarizer listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
