//! Upstream client for calling the OpenAI API
//!
//! One request out per request in. No retries, no relay-imposed
//! timeouts; connection pooling stays on reqwest's defaults.

use axum::http::{HeaderMap, Method};
use bytes::Bytes;
use reqwest::{Client, Response};

#[derive(Clone)]
pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: String) -> Self {
        let http_client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");
        Self {
            http_client,
            base_url,
        }
    }

    /// Join the configured base URL and the request's path suffix.
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send one request upstream and hand back the raw response. The
    /// caller decides whether to stream or buffer the body.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> Result<Response, reqwest::Error> {
        let url = self.build_url(path);

        let mut request = self.http_client.request(method, &url).headers(headers);
        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        request.send().await
    }
}
