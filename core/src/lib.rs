//! OpenAI Relay Core Library
//! Shared logic for configuration, credential resolution, and the forwarding server

pub mod config;
pub mod credentials;
pub mod proxy;
