//! CLI module for Splitwall.
//!
//! Parses the command line and dispatches to the rotation loop or one of the
//! diagnostic commands.

mod commands;
mod output;

use clap::Parser;
pub use commands::{Cli, Commands};

use crate::error::SplitwallError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), SplitwallError> {
    let cli = Cli::parse();
    cli.execute()
}
