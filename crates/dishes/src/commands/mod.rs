//! Command dispatch for dishes.

use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use crate::cli;
use crate::printer::Printer;

mod invert;

/// Exit status for dishes commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command failed due to an error in the user input.
    Failure,

    /// The command failed with an unexpected error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// Dispatch a parsed CLI command to the appropriate handler.
pub fn dispatch(command: cli::Commands, printer: Printer) -> Result<ExitStatus> {
    debug!(command = command.name(), "dispatching");
    match command {
        cli::Commands::Invert(args) => invert::execute(&args, printer),
    }
}
