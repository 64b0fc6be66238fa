//! Error types for the console.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by configuration loading and letter writing.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::MailroomConfig`].
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A donor name cannot be used as a file name inside the output directory.
    #[error("donor name cannot be used as a file name: {name:?}")]
    InvalidFileName { name: String },

    /// I/O error while writing letters.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for console operations.
pub type Result<T> = std::result::Result<T, CliError>;
