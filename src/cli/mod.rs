//! CLI module for the User Registry
//!
//! `serve` runs the HTTP API and is the default when no subcommand is given.

pub mod serve;

use clap::{Parser, Subcommand};

/// User Registry - in-memory user records over HTTP
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(serve::ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}
