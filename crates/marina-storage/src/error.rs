//! Storage error types.

use std::path::PathBuf;

/// Errors from reading or writing a boat data file.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The data file could not be opened for reading.
    #[error("could not open {} for reading: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The data file could not be created or truncated for writing.
    #[error("could not open {} for writing: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Underlying I/O error while streaming records.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
