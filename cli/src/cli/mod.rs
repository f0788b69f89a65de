pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "openai-relay")]
#[command(author, version, about = "OpenAI Relay CLI - Forward OpenAI API requests with a server-held key")]
pub struct Cli {
    /// Path to config file (checked in order: local config.toml, ~/.config/openai-relay/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay server
    Start {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show relay status
    Status,
}
