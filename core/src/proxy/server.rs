//! Relay server - Axum HTTP server

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::credentials::ApiKeySource;
use crate::proxy::handlers::openai::handle_openai_request;
use crate::proxy::upstream::client::UpstreamClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub api_key: Arc<ApiKeySource>,
}

/// Relay server instance
pub struct RelayServer {
    host: String,
    port: u16,
    state: AppState,
}

impl RelayServer {
    pub fn new(host: String, port: u16, upstream: UpstreamClient, api_key: ApiKeySource) -> Self {
        let state = AppState {
            upstream: Arc::new(upstream),
            api_key: Arc::new(api_key),
        };

        Self { host, port, state }
    }

    /// Run the relay server (blocking)
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already-bound listener. Tests bind port 0 themselves
    /// and pass the listener in.
    pub async fn serve(self, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = Router::new()
            // Health check
            .route("/healthz", get(health_check_handler))
            .route("/health", get(health_check_handler))

            // OpenAI passthrough. The wildcard requires a non-empty
            // suffix; a bare /api/openai is a 404.
            .route(
                "/api/openai/*path",
                get(handle_openai_request)
                    .post(handle_openai_request)
                    .put(handle_openai_request)
                    .patch(handle_openai_request)
                    .delete(handle_openai_request),
            )

            .layer(DefaultBodyLimit::max(100 * 1024 * 1024)) // 100MB
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        tracing::info!("Relay server listening on {}", listener.local_addr()?);

        // Handle graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Relay server stopped");
        Ok(())
    }
}

/// Health check handler
async fn health_check_handler() -> Response {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

/// Shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
