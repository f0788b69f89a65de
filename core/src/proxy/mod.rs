//! Proxy module - forwarding server for the OpenAI API
//!
//! Accepts requests under `/api/openai/*`, swaps the caller's credentials
//! for the server-held API key, and relays the upstream response back.

pub mod error;
pub mod handlers;
pub mod headers;
pub mod server;
pub mod upstream;

pub use error::RelayError;
pub use server::{AppState, RelayServer};
pub use upstream::client::UpstreamClient;
