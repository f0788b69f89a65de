//! Upstream client

pub mod client;
