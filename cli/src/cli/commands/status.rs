use std::path::PathBuf;

use openai_relay_core::config::{default_config_path, load_config};
use openai_relay_core::credentials::ApiKeySource;

pub async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let api_key = ApiKeySource::from_config(&config.upstream);

    println!("OpenAI Relay Status");
    println!("===================");
    println!();
    println!("Configuration:");
    println!("  Config file: {:?}", default_config_path());
    println!();
    println!("Server settings:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!();
    println!("Upstream:");
    println!("  Base URL: {}", config.upstream.base_url);
    println!("  API key source: {}", api_key.describe());
    match api_key.resolve() {
        Some(_) => println!("  API key: configured"),
        None => println!("  API key: NOT CONFIGURED"),
    }

    // Check if server is reachable
    println!();
    let url = format!(
        "http://{}:{}/healthz",
        config.server.host, config.server.port
    );
    match reqwest::get(&url).await {
        Ok(resp) if resp.status().is_success() => {
            println!("Server: RUNNING ✓");
        }
        _ => {
            println!("Server: NOT RUNNING");
        }
    }

    Ok(())
}
