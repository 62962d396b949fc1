//! Turning a note into a file the user can take elsewhere.

mod markdown;

use std::path::PathBuf;

use thiserror::Error;

pub use markdown::{export_markdown, markdown_file_name, sanitize_file_stem};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create export directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
