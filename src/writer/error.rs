use std::path::PathBuf;

/// Errors that can occur while writing a grid file pair
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A completed temporary file could not be moved into place
    #[error("Failed to commit {}: {source}", path.display())]
    Persist {
        /// Destination path
        path: PathBuf,
        /// Underlying rename error
        source: std::io::Error,
    },

    /// The buffer file on disk does not have the size the header declares
    #[error("Buffer incomplete: expected {expected} bytes, wrote {actual}")]
    IncompleteBuffer {
        /// `nx * ny * nz * sizeof(scalar)`
        expected: u64,
        /// Bytes found in the temporary buffer file
        actual: u64,
    },

    /// The basename has no file-name component
    #[error("Invalid basename: {0}")]
    InvalidBasename(String),
}
