//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! - `--repo <owner/repo>`: Repository to inspect
//! - `--host <host>`: Self-hosted instance the repository lives on
//! - `--config <path>`: Explicit configuration file
//! - `--token-env <VAR>`: Environment variable holding the bearer token
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// repolens - Repository insight cards in the terminal
#[derive(Parser, Debug)]
#[command(name = "repolens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository slug, e.g. "acme/widgets"
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// Self-hosted instance host the repository lives on
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Path to a configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Environment variable to read the bearer token from
    #[arg(long, global = true, default_value = "GITHUB_TOKEN")]
    pub token_env: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show recent releases
    Releases {
        /// Maximum releases to show
        #[arg(long, default_value_t = 5)]
        limit: usize,

        /// Page size for API requests (defaults to the limit)
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Show top contributors
    Contributors {
        /// Maximum contributors to show
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Page size for API requests (defaults to the limit)
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Show the language breakdown
    Languages,

    /// Show the repository README
    Readme,

    /// Show compliance details (protected branches, license)
    Compliance,
}
