use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a storage backend or while encoding a snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read notes from '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write notes to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),
}
