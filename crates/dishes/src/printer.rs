//! User-facing stderr messages.
//!
//! Diagnostics go through `tracing` (see [`crate::logging`]); the
//! [`Printer`] only carries messages meant for the person running the
//! command. Errors are printed even under `--quiet`.

use anstream::eprintln;
use owo_colors::OwoColorize;

/// Writes warnings and errors to stderr.
#[derive(Copy, Clone)]
pub struct Printer {
    quiet: bool,
}

impl Printer {
    /// Create a printer; `quiet` silences everything but errors.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a warning, unless `--quiet` was given.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}: {}", "warning".yellow().bold(), message);
        }
    }

    /// Print an error.
    pub fn error(&self, message: &str) {
        eprintln!("{}: {}", "error".red().bold(), message);
    }

    /// Print one link of an error's cause chain below the error itself.
    pub fn cause(&self, message: &str) {
        eprintln!("  {}: {}", "Caused by".red().bold(), message.trim());
    }
}
