//! Long format: one aligned row per entry.
//!
//! Columns are `[inode] mode links owner group size time name [-> target]`.
//! Every column is padded to the widest value of the batch; numbers and times
//! are right-aligned, owner and group names left-aligned.

use crate::core::Entry;
use crate::core::classify::FileTag;
use crate::core::humanize::{decimal_len, format_timestamp, human_size};
use crate::core::mode::mode_string;
use crate::core::options::RenderConfig;

use unicode_width::UnicodeWidthStr;

/// Pre-formatted fields of one row.
struct Row {
    inode: String,
    mode: String,
    links: String,
    owner: String,
    group: String,
    size: String,
    time: String,
}

impl Row {
    fn new(entry: &Entry, config: &RenderConfig) -> Self {
        let size = if config.human_readable {
            human_size(entry.size())
        } else {
            entry.size().to_string()
        };
        let time = if config.human_readable {
            (config.relative_time)(entry.mod_time(), config.now)
        } else {
            format_timestamp(entry.mod_time(), config.now)
        };
        Row {
            inode: entry.inode().to_string(),
            mode: mode_string(entry.mode_bits()),
            links: entry.link_count().to_string(),
            owner: entry.owner().to_string(),
            group: entry.group().to_string(),
            size,
            time,
        }
    }
}

#[derive(Default)]
struct ColumnWidths {
    inode: usize,
    links: usize,
    owner: usize,
    group: usize,
    size: usize,
    time: usize,
}

impl ColumnWidths {
    fn widen(&mut self, entry: &Entry, row: &Row) {
        self.inode = self.inode.max(decimal_len(entry.inode()));
        self.links = self.links.max(decimal_len(entry.link_count()));
        self.owner = self.owner.max(row.owner.width());
        self.group = self.group.max(row.group.width());
        self.size = self.size.max(row.size.width());
        self.time = self.time.max(row.time.width());
    }
}

fn pad_left(out: &mut String, text: &str, width: usize) {
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(text.width())));
    out.push_str(text);
}

fn pad_right(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(text.width())));
}

/// The summary line printed ahead of a directory's long listing.
pub fn total_line(total: u64, human_readable: bool) -> String {
    if human_readable {
        format!("total {}", human_size(total))
    } else {
        format!("total {}", total / 1024)
    }
}

/// Renders the sorted entries in long format, one line per entry.
pub fn render_table(entries: &[Entry], sorted: &[usize], config: &RenderConfig) -> Vec<String> {
    let rows: Vec<Row> = sorted
        .iter()
        .map(|&i| Row::new(&entries[i], config))
        .collect();

    let mut widths = ColumnWidths::default();
    for (&i, row) in sorted.iter().zip(&rows) {
        widths.widen(&entries[i], row);
    }

    let painter = config.painter();
    sorted
        .iter()
        .zip(&rows)
        .map(|(&i, row)| {
            let entry = &entries[i];
            let mut line = String::new();
            if config.show_inode {
                pad_left(&mut line, &row.inode, widths.inode);
                line.push(' ');
            }
            line.push_str(&row.mode);
            line.push(' ');
            pad_left(&mut line, &row.links, widths.links);
            line.push(' ');
            pad_right(&mut line, &row.owner, widths.owner);
            line.push(' ');
            pad_right(&mut line, &row.group, widths.group);
            line.push(' ');
            pad_left(&mut line, &row.size, widths.size);
            line.push(' ');
            pad_left(&mut line, &row.time, widths.time);
            line.push(' ');

            let tag = FileTag::for_entry(entry, painter);
            line.push_str(&config.paint(tag.as_ref().map(FileTag::key), entry.display_name()));
            if entry.is_symlink() && !entry.symlink_target().is_empty() {
                line.push_str(" -> ");
                let tag = FileTag::for_link_target(entry, painter);
                line.push_str(&config.paint(
                    tag.as_ref().map(FileTag::key),
                    entry.symlink_target(),
                ));
            }
            line
        })
        .collect()
}
