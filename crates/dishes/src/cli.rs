//! CLI argument definitions for dishes.
//!
//! The [`Cli`] struct is the top-level parser; [`Commands`] enumerates every
//! subcommand.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

use crate::invert::Strategy;

/// Clap v3-style help menu colors.
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Group dishes by ingredient.
#[derive(Parser, Debug)]
#[command(
    name = "dishes",
    author,
    version,
    about = "Group dishes by ingredient.",
    styles = STYLES,
    after_help = "Use `dishes help <command>` for more information on a specific command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity.
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors.
    #[arg(global = true, short, long)]
    pub quiet: bool,
}

/// Top-level subcommands for dishes.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn a dish-to-ingredients table into an ingredient-to-dishes table.
    Invert(InvertArgs),
}

impl Commands {
    /// Return the subcommand name as a static string (for diagnostics).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Invert(_) => "invert",
        }
    }
}

/// Arguments for `dishes invert`.
#[derive(Parser, Debug)]
pub struct InvertArgs {
    /// JSON file holding the dish table; reads stdin when omitted or `-`.
    ///
    /// The table is an array of rows, each row a dish name followed by its
    /// ingredients. Names may be `null`.
    pub input: Option<PathBuf>,

    /// Container used to group ingredients.
    #[arg(long, value_enum, env = "DISHES_STRATEGY", default_value = "ordered")]
    pub strategy: StrategyArg,

    /// How to print the inverted table.
    #[arg(long, value_enum, env = "DISHES_FORMAT", default_value = "json")]
    pub format: OutputFormat,
}

/// Grouping containers selectable on the command line.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// B-tree map of B-tree sets.
    #[default]
    Ordered,
    /// Hash map of hash sets, sorted on output.
    Hashed,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Ordered => Self::Ordered,
            StrategyArg::Hashed => Self::Hashed,
        }
    }
}

/// Output formats for `dishes invert`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A JSON array of `[ingredient, dish, ...]` rows.
    #[default]
    Json,
    /// One `ingredient: dish, dish` line per ingredient.
    Table,
}
