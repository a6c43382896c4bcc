//! Core logic for runa-ls.
//!
//! The render core is a pure, synchronous transform from a batch of entries and
//! a [RenderConfig] to output lines:
//! - [entry]: the [Entry] snapshot and POSIX mode-bit constants.
//! - [formatter]: sorting ([Formatter]).
//! - [humanize]: byte counts, digit counts, relative and absolute times.
//! - [mode]: `drwxr-xr-x` style permission strings.
//! - [classify]: file-type tags and the [Painter] colouring capability.
//! - [grid]: the multi-column grid layout engine.
//! - [table]: the long-format table.
//! - [render]: picks grid or table for a batch ([render()]).
//!
//! [fm] sits outside that core and builds entries from the filesystem.

pub mod classify;
pub mod entry;
pub mod fm;
pub mod formatter;
pub mod grid;
pub mod humanize;
pub mod mode;
pub mod options;
pub mod render;
pub mod table;

pub use classify::{FileTag, Painter};
pub use entry::{Entry, EntryKind};
pub use fm::{DirListing, IdResolver, Visibility, read_dir_entries, read_entry};
pub use formatter::Formatter;
pub use grid::{GridLayout, GridOptions, grid_index};
pub use humanize::{decimal_len, format_timestamp, human_size, relative_time};
pub use mode::mode_string;
pub use options::{Collator, RenderConfig, SortMode};
pub use render::render;
