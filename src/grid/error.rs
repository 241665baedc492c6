/// Errors raised while constructing a grid
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Axis counts do not account for every sample in the data buffer
    #[error("Geometry mismatch: {nx}x{ny}x{nz} grid needs {expected} samples, data has {actual}")]
    GeometryMismatch {
        /// Samples along x
        nx: usize,
        /// Samples along y
        ny: usize,
        /// Samples along z
        nz: usize,
        /// Product of the axis counts
        expected: usize,
        /// Samples in the data buffer
        actual: usize,
    },

    /// An axis has no samples
    #[error("Axis {axis} has zero samples")]
    ZeroAxis {
        /// Axis name (x, y or z)
        axis: char,
    },

    /// Spacing is negative, not finite, or zero on a multi-sample axis
    #[error("Axis {axis} has invalid spacing {spacing} for {count} samples")]
    InvalidSpacing {
        /// Axis name (x, y or z)
        axis: char,
        /// Offending spacing
        spacing: f64,
        /// Samples along the axis
        count: usize,
    },

    /// Origin coordinate is not finite
    #[error("Axis {axis} has non-finite origin {origin}")]
    InvalidOrigin {
        /// Axis name (x, y or z)
        axis: char,
        /// Offending origin
        origin: f64,
    },

    /// Sample count or buffer byte length overflows the address space
    #[error("Grid {nx}x{ny}x{nz} is too large")]
    TooLarge {
        /// Samples along x
        nx: usize,
        /// Samples along y
        ny: usize,
        /// Samples along z
        nz: usize,
    },

    /// A label contains a line break and would corrupt the header
    #[error("Invalid {field} label '{value}': labels must be a single line")]
    InvalidLabel {
        /// Which label (wave or station)
        field: &'static str,
        /// Offending value
        value: String,
    },

    /// Unknown scalar type tag
    #[error("Unknown scalar type '{0}': expected SINGLE or DOUBLE")]
    UnknownScalarType(String),

    /// Unknown grid type tag
    #[error("Unknown grid type '{0}'")]
    UnknownGridType(String),
}
