//! Sorting of listed entries.
//!
//! The [Formatter] holds the sort rules of a [RenderConfig] and produces a total
//! order over entries. Entries themselves are never moved: sorting yields a
//! permutation of indices into the caller's slice.

use crate::core::Entry;
use crate::core::options::{Collator, RenderConfig, SortMode};

use std::cmp::Ordering;

/// Comparator for entries based on the configured sort mode.
pub struct Formatter {
    sort: SortMode,
    reverse: bool,
    collator: Option<Collator>,
}

impl Formatter {
    pub fn new(sort: SortMode, reverse: bool, collator: Option<Collator>) -> Self {
        Self {
            sort,
            reverse,
            collator,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.sort, config.reverse, config.collator.clone())
    }

    /// Compares two entries. Time and size ties fall back to the name order,
    /// and the reverse flag is applied to the final result.
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        let ord = match self.sort {
            SortMode::Name => self.compare_names(a, b),
            SortMode::ModTime => b
                .mod_time()
                .cmp(&a.mod_time())
                .then_with(|| self.compare_names(a, b)),
            SortMode::Size => b
                .size()
                .cmp(&a.size())
                .then_with(|| self.compare_names(a, b)),
        };
        if self.reverse { ord.reverse() } else { ord }
    }

    /// Returns the indices of `entries` in display order. The sort is stable.
    pub fn sorted_indices(&self, entries: &[Entry]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| self.compare(&entries[a], &entries[b]));
        order
    }

    fn compare_names(&self, a: &Entry, b: &Entry) -> Ordering {
        let (a, b) = (a.display_name(), b.display_name());
        let ord = match &self.collator {
            Some(collate) => collate(a, b),
            None => compare_ignore_ascii_case(a, b),
        };
        // Distinct names must never compare equal.
        ord.then_with(|| a.cmp(b))
    }
}

/// Byte-wise comparison with ASCII letters folded to upper case.
pub fn compare_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_uppercase())
        .cmp(b.bytes().map(|c| c.to_ascii_uppercase()))
}
