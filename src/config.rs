//! Configuration for runa-ls.
//!
//! - [load]: the [Config] struct and loading of `rls.toml`.
//! - [general]: default listing behaviour from the `[general]` table.
//! - [theme]: the [LsColors] table used to colour entries.

pub mod general;
pub mod load;
pub mod theme;

pub use general::{ColorWhen, General, InternalGeneral};
pub use load::{Config, RawConfig};
pub use theme::LsColors;
