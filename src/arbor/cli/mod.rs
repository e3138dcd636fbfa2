//! # CLI Layer
//!
//! **One possible UI client** for arbor, not the application itself. This is
//! the only place that parses arguments, reads the terminal, prints, and sets
//! up logging.
//!
//! - `setup`: clap definitions
//! - `commands`: context construction and per-command handlers
//! - `session`: the interactive loop over a single registry
//! - `render`: table, grid and detail output

mod commands;
mod render;
mod session;
mod setup;

pub use commands::run;

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("arbor={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
