//! Multi-column grid layout for short listings.
//!
//! The engine picks the largest column count whose columns fit the available
//! width, in either fill order:
//! - by lines (row-major): entries run left to right, then top to bottom.
//! - by columns (column-major, default): entries run top to bottom, then left
//!   to right. The trailing partial row is balanced so it always occupies the
//!   leftmost columns: the first `len % cols` columns take one extra entry and
//!   no column ends with a hole in the middle of the grid.
//!
//! Because of that balancing, display position `p` always sits at row
//! `p / cols`, column `p % cols` in both orders. Only the entry shown there
//! differs, which is what [grid_index] computes.

use crate::core::Entry;
use crate::core::classify::FileTag;
use crate::core::humanize::decimal_len;
use crate::core::options::RenderConfig;

use unicode_width::UnicodeWidthStr;

/// Spaces between two columns.
pub const COLUMN_PADDING: usize = 2;
/// Narrowest possible cell, used to bound the initial column guess.
pub const MIN_WORD_WIDTH: usize = 1;

/// Maps a display position (row-major over the visible cells) to the index of
/// the entry shown there, for a grid of `cols` columns holding `len` entries.
pub fn grid_index(pos: usize, cols: usize, len: usize, row_major: bool) -> usize {
    if row_major || cols <= 1 {
        return pos;
    }
    let full_rows = len / cols;
    let extra = len % cols;
    let row = pos / cols;
    let col = pos % cols;
    col * full_rows + col.min(extra) + row
}

/// Inputs of the fitting loop that do not depend on the entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub width: usize,
    pub height: usize,
    pub by_lines: bool,
    pub wide: bool,
    pub one_column: bool,
}

impl From<&RenderConfig> for GridOptions {
    fn from(config: &RenderConfig) -> Self {
        GridOptions {
            width: config.width,
            height: config.height,
            by_lines: config.by_lines,
            wide: config.wide,
            one_column: config.one_column,
        }
    }
}

/// Result of fitting a set of cells into columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    cols: usize,
    widths: Vec<usize>,
    order: Vec<usize>,
}

impl GridLayout {
    /// Fits cells of the given display widths into a grid.
    ///
    /// Starts from the widest column count the width could hold and drops one
    /// column at a time until every column fits, recomputing the column
    /// widths from scratch for each candidate. One column always fits.
    /// In wide mode the column count is derived from the height instead and
    /// the width is not enforced.
    pub fn fit(cell_widths: &[usize], opts: &GridOptions) -> Self {
        let len = cell_widths.len();
        if len == 0 {
            return GridLayout {
                cols: 1,
                widths: vec![0],
                order: Vec::new(),
            };
        }

        let mut cols = if opts.one_column {
            1
        } else if opts.wide {
            len.div_ceil(opts.height.saturating_sub(1).max(1))
        } else {
            opts.width / (COLUMN_PADDING + MIN_WORD_WIDTH)
        }
        .clamp(1, len);
        let enforce_width = !(opts.one_column || opts.wide);

        let mut widths = Vec::with_capacity(cols);
        'fit: loop {
            widths.clear();
            widths.resize(cols, 0);
            let mut total = (cols - 1) * COLUMN_PADDING;
            for pos in 0..len {
                let col = pos % cols;
                let w = cell_widths[grid_index(pos, cols, len, opts.by_lines)];
                if w > widths[col] {
                    total += w - widths[col];
                    if enforce_width && cols > 1 && total > opts.width {
                        cols -= 1;
                        continue 'fit;
                    }
                    widths[col] = w;
                }
            }
            break;
        }

        let order = (0..len)
            .map(|pos| grid_index(pos, cols, len, opts.by_lines))
            .collect();
        GridLayout {
            cols,
            widths,
            order,
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.order.len().div_ceil(self.cols)
    }

    #[inline]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Display position -> cell index, row-major over the visible cells.
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cell indices of each display row, top to bottom.
    pub fn row_cells(&self) -> impl Iterator<Item = &[usize]> {
        self.order.chunks(self.cols)
    }
}

/// Width of a grid cell, including the inode prefix when shown.
fn cell_width(entry: &Entry, show_inode: bool) -> usize {
    let name = UnicodeWidthStr::width(entry.display_name());
    if show_inode {
        name + decimal_len(entry.inode()) + 1
    } else {
        name
    }
}

/// Lays out the sorted entries (`sorted` holds indices into `entries`) as a
/// grid and returns one string per row.
pub fn render_grid(entries: &[Entry], sorted: &[usize], config: &RenderConfig) -> Vec<String> {
    let cell_widths: Vec<usize> = sorted
        .iter()
        .map(|&i| cell_width(&entries[i], config.show_inode))
        .collect();
    let layout = GridLayout::fit(&cell_widths, &GridOptions::from(config));

    let mut lines = Vec::with_capacity(layout.rows());
    for row in layout.row_cells() {
        let mut line = String::new();
        for (col, &cell) in row.iter().enumerate() {
            let entry = &entries[sorted[cell]];
            if config.show_inode {
                line.push_str(&entry.inode().to_string());
                line.push(' ');
            }
            let tag = FileTag::for_entry(entry, config.painter());
            line.push_str(&config.paint(tag.as_ref().map(FileTag::key), entry.display_name()));
            if col + 1 < row.len() {
                let pad = layout.widths()[col] - cell_widths[cell] + COLUMN_PADDING;
                line.extend(std::iter::repeat_n(' ', pad));
            }
        }
        lines.push(line);
    }
    lines
}
