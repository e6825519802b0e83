//! Tracing subscriber setup for the `dishes` binary.
//!
//! `-v` enables debug events, `-vv` and above enable trace events, and
//! `--quiet` installs no subscriber at all. `RUST_LOG` directives take
//! precedence over the `-v` level when set. Events are written to stderr so
//! that stdout only ever carries the inverted table.

use std::io::IsTerminal;

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Map the `-v` count onto a maximum tracing level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber.
pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<()> {
    if quiet {
        return Ok(());
    }

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level_for(verbosity)).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| anyhow!(err))
}
