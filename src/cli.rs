//! CLI definitions for hirewatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default configuration file, read only when present.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "hirewatch.toml";

/// hirewatch CLI.
#[derive(Parser)]
#[command(name = "hirewatch")]
#[command(about = "Emails a digest of new job postings near a postal code")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: hirewatch.toml, optional)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Environment file loaded before the configuration (default: .env)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Config path and whether it must exist.
    pub fn config_source(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run one search and send the digest (default)
    Run,

    /// Repeat runs on a cron schedule until interrupted
    Watch {
        /// Six-field cron expression (sec min hour day month weekday)
        #[arg(long)]
        schedule: Option<String>,
    },

    /// Inspect or drop the cached geocoding result
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Check the effective configuration
    Validate,
}

#[derive(Subcommand)]
pub(crate) enum CacheAction {
    /// Print the cached coordinate
    Show,

    /// Delete the cache file so the next run geocodes again
    Clear,
}
