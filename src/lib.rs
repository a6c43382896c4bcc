//! Internal library crate for runa-ls.
//!
//! The shipped application is the `rls` binary (`src/main.rs`).
//!
//! The render core in [core] is usable on its own: hand [core::render] a batch of
//! [core::Entry] values and a [core::RenderConfig] and it returns the output lines.
//! The remaining modules wire that core to the filesystem, the command line and
//! the config file for the binary.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
