//! CLI module for the species prediction API
//!
//! A single subcommand for now:
//! - `serve`: load artifacts and run the HTTP server

pub mod serve;

use clap::{Parser, Subcommand};

/// Aquaculture species prediction API
#[derive(Parser)]
#[command(name = "aqua-species-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the prediction API server
    Serve,
}
