//! Header transforms applied on the way to and from the upstream
//!
//! Pure functions over `HeaderMap`; nothing here touches the request
//! or response objects themselves.

use axum::http::{header, HeaderMap, HeaderName, HeaderValue};

/// Request headers that never reach the upstream. `host` and
/// `authorization` get relay-owned replacements; the framing and
/// encoding headers stop being true once the body has been buffered
/// and re-sent.
fn should_forward_request_header(name: &HeaderName) -> bool {
    !matches!(
        name.as_str(),
        "host" | "authorization" | "content-length" | "transfer-encoding" | "accept-encoding"
    )
}

/// Response headers that never reach the client. The relay re-frames
/// the body it hands back, so the upstream's encoding and framing
/// headers no longer hold.
fn should_forward_response_header(name: &HeaderName) -> bool {
    !matches!(name.as_str(), "content-encoding" | "transfer-encoding")
}

/// Copy the forwardable inbound headers and inject the server-held key.
pub fn build_upstream_headers(
    inbound: &HeaderMap,
    api_key: &str,
) -> Result<HeaderMap, header::InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    for (name, value) in inbound {
        if should_forward_request_header(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))?,
    );
    Ok(headers)
}

/// Copy the forwardable upstream response headers.
pub fn filter_response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in upstream {
        if should_forward_response_header(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers
}

/// True when the upstream marked the response as a server-sent event stream.
pub fn is_event_stream(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("text/event-stream"))
        .unwrap_or(false)
}
