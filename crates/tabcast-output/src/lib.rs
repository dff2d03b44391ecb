//! JSON document sink.
//!
//! Writes the converted records as a pretty-printed JSON array: two-space
//! indentation, keys in schema column order (the order the pipeline
//! inserted them), trailing newline.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use tabcast_model::Record;

/// Errors raised while persisting the output document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Could not create the output file's parent directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create or write the output file.
    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Records could not be serialized.
    #[error("failed to serialize records: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

/// Write `records` to `path`, creating the parent directory when missing.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|source| OutputError::Serialize { source })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(records = records.len(), path = %path.display(), "output written");
    Ok(())
}
