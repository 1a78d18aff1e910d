//! CLI interface for simplebank

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "simplebank")]
#[command(version)]
#[command(about = "Banking API server with JWT/PASETO token authentication", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new simplebank.toml configuration file
    Init,

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Issue and inspect tokens with the configured maker
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
pub enum TokenAction {
    /// Issue a token for a username
    Issue {
        /// Principal the token is issued for
        #[arg(short, long)]
        username: String,

        /// Lifetime in seconds (defaults to the configured access/refresh duration)
        #[arg(short, long)]
        duration_secs: Option<i64>,

        /// Use the refresh token duration instead of the access token duration
        #[arg(short, long)]
        refresh: bool,
    },

    /// Verify a token and print its payload
    Verify {
        /// The token string
        token: String,
    },
}
