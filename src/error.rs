//! Error types for reading input and configuration.
//!
//! The transformation itself cannot fail; only the I/O around it can.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown values.
    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Standard input could not be read.
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
