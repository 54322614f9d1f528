//! CLI module for aeroconv
//!
//! Provides command-line interface for:
//! - convert: Coerce a stream of values to one type
//! - batch: Coerce a stream of typed requests
//! - tags: List the type vocabulary

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{batch, convert, run_command, tags, RunSummary};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{conversion_response, parse_request, parse_value, ConvertRequest};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
