//! Colour table for runa-ls.
//!
//! [LsColors] maps `LS_COLORS` keys (`di`, `ln`, `*.tar`, ...) to terminal
//! styles. The built-in table is overridden by the `[colors]` table of
//! rls.toml and then by the `LS_COLORS` environment variable.
//! # Examples
//! ```toml
//! [colors]
//! di = "1;34"
//! "*.tar" = "1;31"
//! ```

use crate::core::Painter;

use crossterm::style::{Attribute, Color, ContentStyle};
use phf::phf_map;

use std::collections::HashMap;

/// Styles used when neither the config file nor `LS_COLORS` says otherwise.
static DEFAULT_COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "di" => "1;34",
    "ln" => "1;36",
    "pi" => "40;33",
    "so" => "1;35",
    "bd" => "40;33;1",
    "cd" => "40;33;1",
    "or" => "40;31",
    "su" => "37;41",
    "sg" => "30;43",
    "tw" => "30;42",
    "ow" => "34;42",
    "st" => "37;44",
    "ex" => "01;32",
};

const BASE_COLORS: [Color; 8] = [
    Color::Black,
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkBlue,
    Color::DarkMagenta,
    Color::DarkCyan,
    Color::Grey,
];

const BRIGHT_COLORS: [Color; 8] = [
    Color::DarkGrey,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// Parses a `;` separated list of SGR codes such as `01;34` or `38;5;208`.
/// Unknown codes are ignored.
pub fn parse_sgr(codes: &str) -> ContentStyle {
    let mut style = ContentStyle::new();
    let mut parts = codes.split(';').map(|c| c.trim().parse::<u8>().ok());
    while let Some(code) = parts.next() {
        let Some(code) = code else { continue };
        match code {
            0 => style = ContentStyle::new(),
            1 => style.attributes.set(Attribute::Bold),
            4 => style.attributes.set(Attribute::Underlined),
            30..=37 => style.foreground_color = Some(BASE_COLORS[(code - 30) as usize]),
            40..=47 => style.background_color = Some(BASE_COLORS[(code - 40) as usize]),
            90..=97 => style.foreground_color = Some(BRIGHT_COLORS[(code - 90) as usize]),
            38 | 48 => {
                // Only the 256 colour form `38;5;n` is understood.
                let (Some(Some(5)), Some(Some(n))) = (parts.next(), parts.next()) else {
                    continue;
                };
                if code == 38 {
                    style.foreground_color = Some(Color::AnsiValue(n));
                } else {
                    style.background_color = Some(Color::AnsiValue(n));
                }
            }
            _ => {}
        }
    }
    style
}

/// The colour table handed to the render core.
#[derive(Debug, Clone, PartialEq)]
pub struct LsColors {
    styles: HashMap<String, ContentStyle>,
}

impl Default for LsColors {
    fn default() -> Self {
        let styles = DEFAULT_COLORS
            .entries()
            .map(|(key, codes)| (key.to_string(), parse_sgr(codes)))
            .collect();
        LsColors { styles }
    }
}

impl LsColors {
    /// Applies `key = codes` pairs on top of the current table.
    pub fn with_overrides<'a>(mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (key, codes) in pairs {
            self.styles.insert(key.to_string(), parse_sgr(codes));
        }
        self
    }

    /// Applies an `LS_COLORS` formatted string (`di=01;34:*.tar=01;31:...`).
    pub fn with_ls_colors(self, value: &str) -> Self {
        let pairs = value.split(':').filter_map(|def| {
            let (key, codes) = def.split_once('=')?;
            (!key.is_empty()).then_some((key, codes))
        });
        self.with_overrides(pairs)
    }

    /// Built-in defaults, then the config file table, then `LS_COLORS`.
    pub fn from_config(colors: &HashMap<String, String>) -> Self {
        let table = LsColors::default()
            .with_overrides(colors.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        match std::env::var("LS_COLORS") {
            Ok(value) => table.with_ls_colors(&value),
            Err(_) => table,
        }
    }

    pub fn style(&self, key: &str) -> Option<&ContentStyle> {
        self.styles.get(key)
    }
}

impl Painter for LsColors {
    fn knows(&self, key: &str) -> bool {
        self.styles.contains_key(key)
    }

    fn paint(&self, key: &str, text: &str) -> String {
        match self.styles.get(key) {
            Some(style) if *style != ContentStyle::default() => style.apply(text).to_string(),
            _ => text.to_string(),
        }
    }
}
