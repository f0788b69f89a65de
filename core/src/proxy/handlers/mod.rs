//! Request handlers

pub mod openai;
