//! Helpers for runa-ls.
//!
//! Terminal capability queries and the diagnostics subscriber used by the binary.

use std::io::IsTerminal;

/// Width and height used when the terminal cannot be queried.
pub const DEFAULT_TERMINAL_SIZE: (usize, usize) = (80, 24);

/// Whether standard output is attached to a terminal.
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Terminal width and height in cells.
///
/// A positive `COLUMNS` value overrides the queried width.
pub fn terminal_size() -> (usize, usize) {
    let (width, height) = crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or(DEFAULT_TERMINAL_SIZE);
    let width = columns_override(std::env::var("COLUMNS").ok().as_deref()).unwrap_or(width);
    (width, height)
}

fn columns_override(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&w| w > 0)
}

/// Installs the stderr diagnostics subscriber. The filter is read from
/// `RLS_LOG` and defaults to `warn`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RLS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
