//! Entry point of the render core.
//!
//! [render] turns one batch of entries into output lines, choosing between the
//! grid and the long-format table. Callers decide how batches are grouped
//! (flat listings, one batch per directory, or one recursive batch).

use crate::core::Entry;
use crate::core::formatter::Formatter;
use crate::core::grid::render_grid;
use crate::core::options::RenderConfig;
use crate::core::table::{render_table, total_line};

/// Sorts and renders `entries`. The slice itself is left untouched.
pub fn render(entries: &[Entry], config: &RenderConfig) -> Vec<String> {
    let sorted = Formatter::from_config(config).sorted_indices(entries);

    if config.long_format {
        let mut lines = Vec::with_capacity(entries.len() + 1);
        if let Some(total) = config.total_size {
            lines.push(total_line(total, config.human_readable));
        }
        lines.extend(render_table(entries, &sorted, config));
        lines
    } else {
        render_grid(entries, &sorted, config)
    }
}
