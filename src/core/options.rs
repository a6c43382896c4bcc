//! The [RenderConfig] value object.
//!
//! Every setting the render core reads is carried here and passed explicitly
//! into each stage. A config is built once per invocation and never mutated
//! while a render call is running, so independent render calls can share it.

use crate::core::classify::Painter;
use crate::core::humanize::relative_time;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// Locale-aware string comparison supplied by the environment.
pub type Collator = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Produces the relative-time phrase shown in human-readable long format.
pub type RelativeTimeFn = fn(SystemTime, SystemTime) -> String;

/// Sort key for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Name,
    ModTime,
    Size,
}

impl SortMode {
    /// Parses the names accepted by the configuration file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "name" => Some(SortMode::Name),
            "time" | "mtime" | "modified" => Some(SortMode::ModTime),
            "size" => Some(SortMode::Size),
            _ => None,
        }
    }
}

/// Settings for one render call.
#[derive(Clone)]
pub struct RenderConfig {
    pub sort: SortMode,
    pub reverse: bool,
    pub human_readable: bool,
    pub long_format: bool,
    pub one_column: bool,
    /// Row-major fill instead of the default column-major fill.
    pub by_lines: bool,
    /// Fit the grid to `height` rows instead of to `width` columns.
    pub wide: bool,
    pub show_inode: bool,
    /// Byte count for the "total" line printed ahead of a long listing.
    pub total_size: Option<u64>,
    pub width: usize,
    pub height: usize,
    pub now: SystemTime,
    pub collator: Option<Collator>,
    pub painter: Option<Arc<dyn Painter + Send + Sync>>,
    pub relative_time: RelativeTimeFn,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            sort: SortMode::Name,
            reverse: false,
            human_readable: false,
            long_format: false,
            one_column: false,
            by_lines: false,
            wide: false,
            show_inode: false,
            total_size: None,
            width: 80,
            height: 24,
            now: SystemTime::now(),
            collator: None,
            painter: None,
            relative_time,
        }
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("sort", &self.sort)
            .field("reverse", &self.reverse)
            .field("human_readable", &self.human_readable)
            .field("long_format", &self.long_format)
            .field("one_column", &self.one_column)
            .field("by_lines", &self.by_lines)
            .field("wide", &self.wide)
            .field("show_inode", &self.show_inode)
            .field("total_size", &self.total_size)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("collator", &self.collator.is_some())
            .field("painter", &self.painter.is_some())
            .finish()
    }
}

impl RenderConfig {
    /// Paints `text` with the style registered for `key`, or returns it unchanged
    /// when colouring is off.
    pub(crate) fn paint(&self, key: Option<&str>, text: &str) -> String {
        match (&self.painter, key) {
            (Some(painter), Some(key)) => painter.paint(key, text),
            _ => text.to_string(),
        }
    }

    #[inline]
    pub(crate) fn painter(&self) -> Option<&dyn Painter> {
        self.painter.as_deref().map(|p| p as &dyn Painter)
    }
}
