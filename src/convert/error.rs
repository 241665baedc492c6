use std::path::PathBuf;

use crate::grid::GridError;
use crate::table::TableError;
use crate::writer::WriterError;

/// Errors that can occur during table-to-grid conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// A table file could not be read or parsed
    #[error("Failed to load table {}: {source}", path.display())]
    TableLoad {
        /// Table file path
        path: PathBuf,
        /// Parse or I/O failure
        source: TableError,
    },

    /// Table dimensions do not match the sweep
    #[error("Table for phase {phase} is {nd}x{nz}, sweep requires {expected_nd}x{expected_nz}")]
    SweepMismatch {
        /// Phase label
        phase: String,
        /// Distance samples in the sweep
        expected_nd: usize,
        /// Depth samples in the sweep
        expected_nz: usize,
        /// Distance samples in the table
        nd: usize,
        /// Depth samples in the table
        nz: usize,
    },

    /// Phase label cannot be used in a basename
    #[error("Invalid phase label '{0}'")]
    InvalidPhase(String),

    /// Stem cannot be used as a file name
    #[error("Invalid output stem '{0}'")]
    InvalidStem(String),

    /// No stem was configured and the table carries no model name
    #[error("No output stem for phase {0}: set one or parse tables with metadata")]
    MissingStem(String),

    /// Two phases would be written to the same files
    #[error("Phases {first} and {second} both map to {}", basename.display())]
    DuplicateBasename {
        /// Phase written first
        first: String,
        /// Conflicting phase
        second: String,
        /// Shared basename
        basename: PathBuf,
    },

    /// Nothing to convert
    #[error("No phases to convert")]
    NoTables,

    /// Grid construction failed
    #[error("Grid error: {0}")]
    GridError(#[from] GridError),

    /// Writing a grid file pair failed
    #[error("Writer error: {0}")]
    WriterError(#[from] WriterError),
}
