//! dishes: group dishes by the ingredients they use.
//!
//! The library half is [`invert`], a pure transform from a
//! dish-to-ingredients table to an ingredient-to-dishes table. The binary
//! half parses CLI arguments, reads a JSON dish table and prints the
//! inverted table.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::printer::Printer;

pub mod cli;
pub mod commands;
pub mod invert;
pub mod logging;
pub mod printer;

pub use invert::{
    ERR_EMPTY_DISH, ERR_EMPTY_INGREDIENT, ERR_NULL_DISH, ERR_NULL_INGREDIENT, InvertError,
    Strategy, invert, invert_with,
};

/// Entry point for the dishes CLI.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    let printer = Printer::new(cli.quiet);

    if let Err(err) = logging::setup_logging(cli.verbose, cli.quiet) {
        printer.warn(&format!("failed to initialize logging: {err}"));
    }

    match commands::dispatch(cli.command, printer) {
        Ok(status) => status.into(),
        Err(err) => {
            printer.error(&err.to_string());
            for cause in err.chain().skip(1) {
                printer.cause(&cause.to_string());
            }
            ExitStatus::Error.into()
        }
    }
}
