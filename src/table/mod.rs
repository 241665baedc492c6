//! # Travel-Time Tables
//!
//! The external table generator writes one travel time per line for every
//! `(distance, depth)` pair of the sweep, distance outermost. This module turns
//! that text into a dense [`TravelTimeTable`] and refuses anything that does
//! not hold exactly `nd * nz` well-formed values.
//!
//! ```rust
//! use ttgrid::table::TableParser;
//!
//! let text = "phase: P\nmodel: iasp91\n0.0\n1.5\n2.0\n2.5\n";
//! let table = TableParser::new(2, 2).with_metadata(true).parse_str(text)?;
//!
//! assert_eq!(table.shape(), (2, 2));
//! assert_eq!(table.get(1, 0), Some(2.0));
//! assert_eq!(table.phase(), Some("P"));
//! # Ok::<(), ttgrid::table::TableError>(())
//! ```

mod error;
mod parser;

#[cfg(test)]
mod tests;

pub use error::TableError;
pub use parser::TableParser;

/// Dense travel-time array indexed by `(distance index, depth index)`
#[derive(Debug, Clone, PartialEq)]
pub struct TravelTimeTable {
    nd: usize,
    nz: usize,
    values: Vec<f64>,
    phase: Option<String>,
    model: Option<String>,
}

impl TravelTimeTable {
    /// Wrap already-computed row-major values, checking the shape invariant
    pub fn from_values(nd: usize, nz: usize, values: Vec<f64>) -> Result<Self, TableError> {
        if nd == 0 || nz == 0 {
            return Err(TableError::InvalidDimensions { nd, nz });
        }
        let expected = nd
            .checked_mul(nz)
            .ok_or(TableError::InvalidDimensions { nd, nz })?;
        if values.len() != expected {
            return Err(TableError::Shape {
                nd,
                nz,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            nd,
            nz,
            values,
            phase: None,
            model: None,
        })
    }

    /// Attach a phase name
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    /// Attach a source model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Dimensions `(nd, nz)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nd, self.nz)
    }

    /// Number of distance samples
    pub fn distance_count(&self) -> usize {
        self.nd
    }

    /// Number of depth samples
    pub fn depth_count(&self) -> usize {
        self.nz
    }

    /// Travel time in seconds at `(distance index, depth index)`
    pub fn get(&self, id: usize, iz: usize) -> Option<f64> {
        (id < self.nd && iz < self.nz).then(|| self.values[id * self.nz + iz])
    }

    /// All depth samples for one distance
    pub fn row(&self, id: usize) -> Option<&[f64]> {
        (id < self.nd).then(|| &self.values[id * self.nz..(id + 1) * self.nz])
    }

    /// Values in row-major order, depth fastest
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the table, returning its row-major values
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Phase name from the table header, if parsed with metadata
    pub fn phase(&self) -> Option<&str> {
        self.phase.as_deref()
    }

    /// Source model name from the table header, if parsed with metadata
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}
