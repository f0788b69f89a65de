use std::path::PathBuf;

use openai_relay_core::config::load_config;
use openai_relay_core::credentials::ApiKeySource;
use openai_relay_core::proxy::{RelayServer, UpstreamClient};

pub async fn run(config_path: Option<PathBuf>, port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = load_config(config_path)?;

    // Apply port override if provided
    if let Some(port) = port_override {
        config.server.port = port;
    }

    let api_key = ApiKeySource::from_config(&config.upstream);

    tracing::info!("Starting OpenAI Relay...");
    tracing::info!("  Port: {}", config.server.port);
    tracing::info!("  Host: {}", config.server.host);
    tracing::info!("  Upstream: {}", config.upstream.base_url);
    tracing::info!("  API key source: {}", api_key.describe());

    if api_key.resolve().is_none() {
        tracing::warn!("No API key found ({}).", api_key.describe());
        tracing::warn!("The relay will start but requests will fail until a key is provided.");
    }

    let upstream = UpstreamClient::new(config.upstream.base_url.clone());

    // Create and start server
    let server = RelayServer::new(
        config.server.host.clone(),
        config.server.port,
        upstream,
        api_key,
    );

    tracing::info!(
        "Relay server starting on http://{}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!("Press Ctrl+C to stop");

    // Run server (blocks until shutdown)
    server.run().await?;

    Ok(())
}
