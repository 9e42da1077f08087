//! CLI argument definitions using clap
//!
//! Commands:
//! - crawlstore store --config <path>
//! - crawlstore dig --config <path>
//! - crawlstore normalize --config <path>
//! - crawlstore coerce <token>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// crawlstore - flat-file warehouse for crawled records
#[derive(Parser, Debug)]
#[command(name = "crawlstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store records read from stdin (one JSON object per line)
    Store {
        /// Path to configuration file
        #[arg(long, default_value = "./crawlstore.json")]
        config: PathBuf,
    },

    /// Find stored records matching a JSON query read from stdin
    Dig {
        /// Path to configuration file
        #[arg(long, default_value = "./crawlstore.json")]
        config: PathBuf,
    },

    /// Print the normalized form and identity of records without storing them
    Normalize {
        /// Path to configuration file
        #[arg(long, default_value = "./crawlstore.json")]
        config: PathBuf,
    },

    /// Print the typed value inferred for a token
    Coerce {
        /// Raw token
        token: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
