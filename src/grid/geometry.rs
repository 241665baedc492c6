use serde::Serialize;

use super::{GridError, ScalarType};

const AXES: [char; 3] = ['x', 'y', 'z'];

/// Widest sample; the buffer byte length at this precision must fit in `usize`
const MAX_SAMPLE_BYTES: usize = ScalarType::Double.byte_size();

/// Shape, origin and spacing of a regular 3-D grid, in kilometers.
///
/// Constructed through [`GridGeometry::new`], which rejects empty axes and
/// unusable spacings, as well as shapes whose buffer byte length would not
/// fit in `usize`. An axis of one sample with zero spacing is a flattened
/// dimension, which is how 2-D travel-time slices are stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridGeometry {
    counts: [usize; 3],
    origin: [f64; 3],
    spacing: [f64; 3],
}

impl GridGeometry {
    /// Validate and build a geometry from `(nx, ny, nz)`, origin and spacing
    pub fn new(counts: [usize; 3], origin: [f64; 3], spacing: [f64; 3]) -> Result<Self, GridError> {
        for (i, axis) in AXES.iter().copied().enumerate() {
            let count = counts[i];
            if count == 0 {
                return Err(GridError::ZeroAxis { axis });
            }
            if !origin[i].is_finite() {
                return Err(GridError::InvalidOrigin {
                    axis,
                    origin: origin[i],
                });
            }
            let d = spacing[i];
            if !d.is_finite() || d < 0.0 || (d == 0.0 && count > 1) {
                return Err(GridError::InvalidSpacing {
                    axis,
                    spacing: d,
                    count,
                });
            }
        }

        let [nx, ny, nz] = counts;
        nx.checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .and_then(|n| n.checked_mul(MAX_SAMPLE_BYTES))
            .ok_or(GridError::TooLarge { nx, ny, nz })?;

        Ok(Self {
            counts,
            origin,
            spacing,
        })
    }

    /// Axis counts `(nx, ny, nz)`
    pub fn counts(&self) -> [usize; 3] {
        self.counts
    }

    /// Origin coordinates (km)
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    /// Sample spacing along each axis (km)
    pub fn spacing(&self) -> [f64; 3] {
        self.spacing
    }

    /// Samples along x
    pub fn nx(&self) -> usize {
        self.counts[0]
    }

    /// Samples along y
    pub fn ny(&self) -> usize {
        self.counts[1]
    }

    /// Samples along z
    pub fn nz(&self) -> usize {
        self.counts[2]
    }

    /// Total number of samples, `nx * ny * nz`
    pub fn sample_count(&self) -> usize {
        // overflow excluded by the constructor
        self.counts.iter().product()
    }

    /// Flat buffer index of `(ix, iy, iz)`; z varies fastest, then y, then x
    pub fn index_of(&self, ix: usize, iy: usize, iz: usize) -> Option<usize> {
        let [nx, ny, nz] = self.counts;
        (ix < nx && iy < ny && iz < nz).then(|| (ix * ny + iy) * nz + iz)
    }

    /// Physical coordinates (km) of the node `(ix, iy, iz)`
    pub fn node(&self, ix: usize, iy: usize, iz: usize) -> [f64; 3] {
        let idx = [ix, iy, iz];
        std::array::from_fn(|i| self.origin[i] + idx[i] as f64 * self.spacing[i])
    }
}
