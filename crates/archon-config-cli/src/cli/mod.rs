//! CLI for checking Archon startup configuration.

mod commands;

use anyhow::Result;
use archon_config::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_check, run_init, run_inspect_key, run_rag, run_validate_url};

/// Top-level CLI for the Archon configuration checker.
#[derive(Debug, Parser)]
#[command(name = "archon-config")]
#[command(about = "Validate Archon startup configuration before deploying", long_about = None)]
pub struct Cli {
    /// Load variables from this .env file first (existing variables win).
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load and validate the full server configuration.
    Check,

    /// Check whether a backend URL is acceptable.
    ValidateUrl {
        /// Backend (Supabase) URL, e.g. http://10.0.0.5:8000.
        url: String,
    },

    /// Report which kind of Supabase key this is.
    InspectKey {
        /// The key to inspect.
        key: String,
    },

    /// Show the resolved RAG strategy flags.
    Rag,

    /// Write a default config file if none exists.
    Init,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let Some(path) = &cli.env_file {
            config::load_dotenv(path)?;
        }

        match cli.command {
            CliCommand::Check => {
                let file = config::load()?;
                run_check(&file)?;
            }
            CliCommand::ValidateUrl { url } => run_validate_url(&url)?,
            CliCommand::InspectKey { key } => run_inspect_key(&key)?,
            CliCommand::Rag => {
                let file = config::load()?;
                run_rag(&file);
            }
            CliCommand::Init => run_init()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
