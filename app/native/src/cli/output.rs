//! CLI output formatting utilities.

use std::io::{self, IsTerminal, Write};

use colored::Colorize;
use serde::Serialize;

use crate::error::SplitwallError;

/// Prints `value` as pretty JSON, followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), SplitwallError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Formats the number of candidate images for a monitor.
///
/// Zero is highlighted since such a monitor stays black.
#[must_use]
pub fn format_image_count(count: usize) -> String {
    if count == 0 {
        if io::stdout().is_terminal() { "none".red().to_string() } else { "none".to_string() }
    } else {
        count.to_string()
    }
}
