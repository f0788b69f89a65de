//! Shared utilities for relay integration tests.

use std::net::SocketAddr;

use axum::Router;
use openai_relay_core::credentials::ApiKeySource;
use openai_relay_core::proxy::{RelayServer, UpstreamClient};
use tokio::net::TcpListener;

/// Serve a mock upstream router on a free port.
pub async fn spawn_mock_upstream(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}

/// Start the relay on a free port, pointed at `base_url`.
pub async fn spawn_relay(base_url: String, api_key: ApiKeySource) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = RelayServer::new(
        "127.0.0.1".to_string(),
        addr.port(),
        UpstreamClient::new(base_url),
        api_key,
    );

    tokio::spawn(async move {
        let _ = server.serve(listener).await;
    });

    addr
}

/// reqwest client that ignores any system proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
