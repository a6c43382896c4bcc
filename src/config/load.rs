//! The main config loading module for runa-ls.
//!
//! Handles loading and deserializing settings from `rls.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! When no config file exists the internal defaults are used.

use crate::config::{General, InternalGeneral, LsColors};
use crate::error::{self, LsError};

use serde::Deserialize;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Raw configuration as read from the toml file.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    colors: HashMap<String, String>,
}

/// Processed configuration used by runa-ls.
#[derive(Debug, Default)]
pub struct Config {
    general: InternalGeneral,
    colors: HashMap<String, String>,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            colors: raw.colors,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// A missing file silently yields the defaults. A file that cannot be
    /// read or parsed is reported and the defaults are used instead.
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::from_path(&path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                tracing::debug!("no config file at '{}', using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::error!("{}", e);
                Self::default()
            }
        }
    }

    /// Reads and parses the config file at `path`. Returns `Ok(None)` when the
    /// file does not exist.
    pub fn from_path(path: &Path) -> error::Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(LsError::Access {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let raw: RawConfig = toml::from_str(&content).map_err(|source| LsError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(raw.into()))
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn colors(&self) -> &HashMap<String, String> {
        &self.colors
    }

    /// The colour table: built-in defaults, then `[colors]`, then `LS_COLORS`.
    pub fn ls_colors(&self) -> LsColors {
        LsColors::from_config(&self.colors)
    }

    /// Determine the default configuration file path.
    /// Checks the RLS_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/rls/rls.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("RLS_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("rls/rls.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config/rls/rls.toml");
        }
        PathBuf::from("rls.toml")
    }
}
