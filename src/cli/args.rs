//! CLI argument definitions using clap
//!
//! Commands:
//! - aeroconv convert --type <tag> [--table <tb>] [--config <path>]
//! - aeroconv batch [--config <path>]
//! - aeroconv tags

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aeroconv - Coerce untyped values to a fixed vocabulary of types
#[derive(Parser, Debug)]
#[command(name = "aeroconv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert newline-delimited JSON values from stdin to one type
    Convert {
        /// Target type tag
        #[arg(long = "type", value_name = "TAG")]
        tag: String,

        /// Expected record table (record tag only)
        #[arg(long)]
        table: Option<String>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Convert newline-delimited JSON requests from stdin
    Batch {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the recognized type tags
    Tags,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
