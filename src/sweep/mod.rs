//! # Sweep Axes
//!
//! A sweep is the ordered set of sample coordinates along one geometric axis
//! (epicentral distance or source depth). The external table generator is fed
//! exactly these coordinates, and the resulting table is laid out in the same
//! order, so the sweep doubles as the grid axis definition.
//!
//! ```rust
//! use ttgrid::sweep::SampleGrid1D;
//!
//! let axis = SampleGrid1D::new(0.0, 10.0, 2.0)?;
//! assert_eq!(axis.to_vec(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
//!
//! // 9.0 is not on a step boundary, so 10.0 is not reached
//! let axis: SampleGrid1D = "0:9:2".parse()?;
//! assert_eq!(axis.len(), 5);
//! # Ok::<(), ttgrid::sweep::SweepError>(())
//! ```

mod error;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

pub use error::SweepError;

/// Maximum number of depth samples accepted at the command-line boundary
pub const MAX_DEPTH_SAMPLES: usize = 200;

/// Tolerance, in units of `step`, applied before flooring the sample count
const STEP_TOLERANCE: f64 = 1e-9;

/// Evenly spaced sample coordinates `start, start + step, ...` up to an
/// inclusive stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid1D {
    start: f64,
    step: f64,
    count: usize,
}

impl SampleGrid1D {
    /// Build a sweep from `(start, stop, step)`.
    ///
    /// The sample count is `floor((stop - start) / step) + 1`, so `stop` is
    /// included only when it lands on a step boundary.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, SweepError> {
        let invalid = |reason| SweepError::InvalidRange {
            start,
            stop,
            step,
            reason,
        };

        if !start.is_finite() || !stop.is_finite() || !step.is_finite() {
            return Err(invalid("bounds and step must be finite"));
        }
        if step <= 0.0 {
            return Err(invalid("step must be positive"));
        }
        if stop < start {
            return Err(invalid("stop must not be below start"));
        }

        let intervals = ((stop - start) / step + STEP_TOLERANCE).floor();
        if intervals >= usize::MAX as f64 {
            return Err(invalid("too many samples"));
        }

        Ok(Self {
            start,
            step,
            count: intervals as usize + 1,
        })
    }

    /// Number of samples (always at least one)
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always false; a valid sweep holds at least one sample
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First sample coordinate
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Sample spacing
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Last sample coordinate actually generated
    pub fn last(&self) -> f64 {
        self.sample(self.count - 1)
    }

    /// Coordinate of the `index`-th sample, or `None` past the end
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.sample(index))
    }

    /// Iterate over the sample coordinates in ascending order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.sample(i))
    }

    /// Collect the sample coordinates
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    fn sample(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }
}

impl FromStr for SampleGrid1D {
    type Err = SweepError;

    /// Parse a `min:max:step` description
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [min, max, step] = parts.as_slice() else {
            return Err(SweepError::InvalidDescription(s.to_string()));
        };

        let parse = |v: &str| {
            v.parse::<f64>()
                .map_err(|_| SweepError::InvalidDescription(s.to_string()))
        };

        Self::new(parse(*min)?, parse(*max)?, parse(*step)?)
    }
}

impl fmt::Display for SampleGrid1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.last(), self.step)
    }
}

/// The distance and depth axes of one conversion run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Epicentral distance samples
    pub distance: SampleGrid1D,
    /// Source depth samples (kilometers)
    pub depth: SampleGrid1D,
}

impl Sweep {
    /// Pair a distance sweep with a depth sweep
    pub fn new(distance: SampleGrid1D, depth: SampleGrid1D) -> Self {
        Self { distance, depth }
    }

    /// Table dimensions `(nd, nz)` expected for this sweep
    pub fn table_shape(&self) -> (usize, usize) {
        (self.distance.len(), self.depth.len())
    }
}
