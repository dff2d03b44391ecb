//! Error types for config loading and row ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the schema config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the config file.
    #[error("failed to read config {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config document is not valid YAML or has the wrong shape.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors raised while reading input rows.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read input {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is in an encoding the reader does not support.
    #[error("unsupported {encoding} encoding in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Input is not parseable as delimited text.
    #[error("failed to parse input {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
