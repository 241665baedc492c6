use std::path::PathBuf;

use crate::format::HeaderError;
use crate::grid::GridError;

/// Errors that can occur while reading a grid file pair
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// One of the two files is absent; the pair is incomplete
    #[error("Incomplete grid file pair: {} is missing", path.display())]
    MissingFile {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// Header file is malformed
    #[error("Failed to parse header {}: {source}", path.display())]
    HeaderParse {
        /// Header file path
        path: PathBuf,
        /// Decoding failure, including the line number
        source: HeaderError,
    },

    /// Buffer file size disagrees with the header
    #[error("Buffer {} has {actual} bytes, header requires {expected}", path.display())]
    BufferSize {
        /// Buffer file path
        path: PathBuf,
        /// `nx * ny * nz * sizeof(scalar)`
        expected: u64,
        /// Size found on disk
        actual: u64,
    },

    /// Header and buffer do not form a valid grid
    #[error("Invalid grid: {0}")]
    GridError(#[from] GridError),
}
