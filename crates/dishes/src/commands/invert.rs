//! `dishes invert` — read a dish table and print it grouped by ingredient.

use std::fmt::Write as _;
use std::io::{Read, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::{InvertArgs, OutputFormat};
use crate::commands::ExitStatus;
use crate::invert::{DishRow, IngredientTable, invert_with};
use crate::printer::Printer;

/// Execute `dishes invert`.
pub(crate) fn execute(args: &InvertArgs, printer: Printer) -> Result<ExitStatus> {
    let dishes = read_dish_table(args.input.as_deref())?;

    let table = match invert_with(dishes.as_deref(), args.strategy.into()) {
        Ok(table) => table,
        Err(err) => {
            printer.error(&err.to_string());
            return Ok(ExitStatus::Failure);
        }
    };

    let rendered = render(&table, args.format)?;
    let mut stdout = anstream::stdout();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write inverted table")?;

    Ok(ExitStatus::Success)
}

/// Load a dish table from `input`, or from stdin when `input` is absent or `-`.
///
/// A JSON `null` document is an absent table rather than a parse error.
fn read_dish_table(input: Option<&Path>) -> Result<Option<Vec<DishRow>>> {
    let content = match input {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading dish table");
            fs_err::read_to_string(path)?
        }
        _ => {
            debug!("reading dish table from stdin");
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read dish table from stdin")?;
            content
        }
    };

    let document: serde_json::Value =
        serde_json::from_str(&content).context("failed to parse dish table as JSON")?;
    serde_json::from_value(document).context(
        "dish table must be `null` or an array of rows, each row an array of strings or `null`s",
    )
}

fn render(table: &IngredientTable, format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(table)?);
            out.push('\n');
        }
        OutputFormat::Table => {
            for row in table {
                if let Some((ingredient, dishes)) = row.split_first() {
                    writeln!(out, "{ingredient}: {}", dishes.join(", "))?;
                }
            }
        }
    }
    Ok(out)
}
