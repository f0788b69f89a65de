//! Relay error type and its wire format
//!
//! Every relay-originated failure surfaces as HTTP 500 with the body
//! `{"error": {"message": "..."}}`. Upstream error statuses are not
//! relay failures and pass through untouched.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// No API key available at request time.
    #[error("Server API key not configured")]
    MissingApiKey,

    /// The request never completed a round trip: reading the inbound
    /// body failed, or the upstream call failed before a status came back.
    #[error("{message}")]
    Upstream { message: String },
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream {
            message: err.to_string(),
        }
    }
}

impl From<axum::Error> for RelayError {
    fn from(err: axum::Error) -> Self {
        Self::Upstream {
            message: format!("Failed to read request body: {}", err),
        }
    }
}

impl From<axum::http::Error> for RelayError {
    fn from(err: axum::http::Error) -> Self {
        Self::Upstream {
            message: format!("Failed to build response: {}", err),
        }
    }
}

impl From<axum::http::header::InvalidHeaderValue> for RelayError {
    fn from(err: axum::http::header::InvalidHeaderValue) -> Self {
        Self::Upstream {
            message: format!("Invalid API key value: {}", err),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": {
                    "message": self.to_string()
                }
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn missing_key_message_is_stable() {
        assert_eq!(
            RelayError::MissingApiKey.to_string(),
            "Server API key not configured"
        );
    }

    #[tokio::test]
    async fn responses_use_the_error_envelope() {
        let response = RelayError::Upstream {
            message: "connection refused".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["message"], "connection refused");
    }
}
