/// Errors that can occur while parsing a travel-time table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// I/O error reading the table source
    #[error("Failed to read table: {0}")]
    IoError(#[from] std::io::Error),

    /// Requested dimensions are unusable
    #[error("Invalid table dimensions {nd}x{nz}: both must be positive")]
    InvalidDimensions {
        /// Number of distance samples requested
        nd: usize,
        /// Number of depth samples requested
        nz: usize,
    },

    /// Number of data rows does not match `nd * nz`
    #[error("Table shape mismatch for {nd}x{nz}: expected {expected} rows, found {actual}")]
    Shape {
        /// Number of distance samples requested
        nd: usize,
        /// Number of depth samples requested
        nz: usize,
        /// Rows required (`nd * nz`)
        expected: usize,
        /// Rows available after the header
        actual: usize,
    },

    /// A data row is not a single floating-point value
    #[error("Line {line}: expected a single travel-time value, found '{content}'")]
    Parse {
        /// 1-based line number in the source text
        line: usize,
        /// Raw content of the offending line
        content: String,
    },

    /// A metadata header line is missing or malformed
    #[error("Line {line}: invalid table header '{content}': {reason}")]
    Header {
        /// 1-based line number in the source text
        line: usize,
        /// Raw content of the offending line
        content: String,
        /// What was expected at this position
        reason: String,
    },
}
