//! OpenAI passthrough handler
//!
//! Forwards everything under `/api/openai/*` to the configured upstream
//! with the server-held API key injected. Event streams are relayed
//! chunk by chunk as they arrive; all other responses are buffered and
//! returned whole.

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::{header, Method},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::proxy::error::RelayError;
use crate::proxy::headers::{build_upstream_headers, filter_response_headers, is_event_stream};
use crate::proxy::server::AppState;

/// Handle one request under /api/openai/*.
pub async fn handle_openai_request(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> Response {
    // Random trace ID for correlating log lines
    let trace_id: String = {
        use rand::Rng;
        rand::rng()
            .sample_iter(&rand::distr::Alphanumeric)
            .take(6)
            .map(char::from)
            .collect::<String>()
            .to_lowercase()
    };

    match relay(&state, &trace_id, &path, request).await {
        Ok(response) => response,
        Err(err) => {
            error!("[{}] Relay error: {}", trace_id, err);
            err.into_response()
        }
    }
}

async fn relay(
    state: &AppState,
    trace_id: &str,
    path: &str,
    request: Request,
) -> Result<Response, RelayError> {
    // The key is resolved on every request, never cached
    let api_key = state.api_key.resolve().ok_or(RelayError::MissingApiKey)?;

    let (parts, body) = request.into_parts();
    let method = parts.method;

    info!("[{}] OpenAI Request | {} /{}", trace_id, method, path);

    let upstream_headers = build_upstream_headers(&parts.headers, &api_key)?;

    // Only body-carrying methods get their body read and re-sent
    let body = if matches!(method, Method::POST | Method::PUT | Method::PATCH) {
        Some(axum::body::to_bytes(body, usize::MAX).await?)
    } else {
        None
    };

    let upstream_response = state
        .upstream
        .forward(method, path, upstream_headers, body)
        .await?;

    let status = upstream_response.status();

    if is_event_stream(upstream_response.headers()) {
        info!("[{}] Streaming | Status: {}", trace_id, status);

        // Relay the upstream bytes as they arrive. If the upstream
        // stream fails midway the client sees a truncated stream.
        let response = Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "text/event-stream")
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::CONNECTION, "keep-alive")
            .body(Body::from_stream(upstream_response.bytes_stream()))?;
        return Ok(response);
    }

    let response_headers = filter_response_headers(upstream_response.headers());
    let bytes = upstream_response.bytes().await?;

    info!(
        "[{}] Completed | Status: {} | {} bytes",
        trace_id,
        status,
        bytes.len()
    );

    Ok((status, response_headers, Body::from(bytes)).into_response())
}
