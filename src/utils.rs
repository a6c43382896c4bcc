//! Miscellaneous utility functions for runa-ls.
//!
//! - [cli]: command-line parsing and help text.
//! - [helpers]: terminal queries and logging setup.

pub mod cli;
pub mod helpers;

pub use helpers::{init_logging, stdout_is_terminal, terminal_size};
