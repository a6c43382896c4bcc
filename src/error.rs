//! Error type for the fallible parts of runa-ls.
//!
//! The render core never fails. Errors come from reading the filesystem,
//! parsing the command line and loading the configuration file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LsError {
    #[error("cannot access '{}': {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid argument '{value}' for '{option}'")]
    InvalidArgument { option: String, value: String },

    #[error("invalid config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("write error: {0}")]
    Write(#[from] io::Error),
}

impl LsError {
    /// Process exit status for this error, following `ls`: 2 for serious
    /// trouble such as bad operands or options, 1 for minor problems.
    pub fn exit_code(&self) -> i32 {
        match self {
            LsError::ReadDir { .. } => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, LsError>;
