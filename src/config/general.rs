//! The general configuration settings for runa-ls.
//!
//! This module defines the [General] struct for deserializing the `[general]`
//! table of rls.toml and the [InternalGeneral] struct used after validation.

use crate::core::SortMode;

use serde::Deserialize;

/// When to colour output.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Parses the value of `--color=WHEN`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" | "tty" | "if-tty" => Some(ColorWhen::Auto),
            "always" | "yes" | "force" => Some(ColorWhen::Always),
            "never" | "no" | "none" => Some(ColorWhen::Never),
            _ => None,
        }
    }

    /// Whether colour is on for an output that is or is not a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorWhen::Auto => is_terminal,
            ColorWhen::Always => true,
            ColorWhen::Never => false,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    sort: String,
    reverse: bool,
    human_readable: bool,
    show_inode: bool,
    by_lines: bool,
    color: ColorWhen,
}

impl Default for General {
    fn default() -> Self {
        General {
            sort: "name".to_string(),
            reverse: false,
            human_readable: false,
            show_inode: false,
            by_lines: false,
            color: ColorWhen::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalGeneral {
    sort: SortMode,
    reverse: bool,
    human_readable: bool,
    show_inode: bool,
    by_lines: bool,
    color: ColorWhen,
}

impl Default for InternalGeneral {
    fn default() -> Self {
        InternalGeneral::from(General::default())
    }
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let sort = SortMode::from_name(&g.sort).unwrap_or_else(|| {
            tracing::warn!("unknown sort '{}' in config, sorting by name", g.sort);
            SortMode::Name
        });
        Self {
            sort,
            reverse: g.reverse,
            human_readable: g.human_readable,
            show_inode: g.show_inode,
            by_lines: g.by_lines,
            color: g.color,
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    #[inline]
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    #[inline]
    pub fn human_readable(&self) -> bool {
        self.human_readable
    }

    #[inline]
    pub fn show_inode(&self) -> bool {
        self.show_inode
    }

    #[inline]
    pub fn by_lines(&self) -> bool {
        self.by_lines
    }

    #[inline]
    pub fn color(&self) -> ColorWhen {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_when_names() {
        assert_eq!(ColorWhen::from_name("always"), Some(ColorWhen::Always));
        assert_eq!(ColorWhen::from_name("never"), Some(ColorWhen::Never));
        assert_eq!(ColorWhen::from_name("auto"), Some(ColorWhen::Auto));
        assert_eq!(ColorWhen::from_name("sometimes"), None);
        assert!(ColorWhen::Auto.enabled(true));
        assert!(!ColorWhen::Auto.enabled(false));
        assert!(ColorWhen::Always.enabled(false));
    }

    #[test]
    fn unknown_sort_falls_back_to_name() -> Result<(), Box<dyn std::error::Error>> {
        let general: General = toml::from_str("sort = \"extension\"")?;
        assert_eq!(InternalGeneral::from(general).sort(), SortMode::Name);

        let general: General = toml::from_str("sort = \"size\"\nreverse = true")?;
        let general = InternalGeneral::from(general);
        assert_eq!(general.sort(), SortMode::Size);
        assert!(general.reverse());
        Ok(())
    }
}
