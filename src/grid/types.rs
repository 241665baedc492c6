use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GridError;

/// Floating-point precision of the stored samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScalarType {
    /// 32-bit IEEE 754
    #[default]
    #[serde(alias = "single", alias = "float")]
    Single,
    /// 64-bit IEEE 754
    #[serde(alias = "double")]
    Double,
}

impl ScalarType {
    /// Header tag for this precision
    pub fn tag(&self) -> &'static str {
        match self {
            ScalarType::Single => "SINGLE",
            ScalarType::Double => "DOUBLE",
        }
    }

    /// Bytes per sample in the buffer file
    pub const fn byte_size(&self) -> usize {
        match self {
            ScalarType::Single => 4,
            ScalarType::Double => 8,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ScalarType {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SINGLE" | "FLOAT" => Ok(ScalarType::Single),
            "DOUBLE" => Ok(ScalarType::Double),
            _ => Err(GridError::UnknownScalarType(s.to_string())),
        }
    }
}

/// Semantic kind of the sampled field, using the tags common to
/// seismic-location grid files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GridType {
    /// Velocity (km/s)
    Velocity,
    /// Velocity (m/s)
    VelocityMeters,
    /// Slowness (s/km)
    Slowness,
    /// Velocity squared
    Vel2,
    /// Slowness squared
    Slow2,
    /// Slowness squared (s/m)
    Slow2Meters,
    /// Slowness times cell length
    SlowLen,
    /// 3-D travel time (s)
    Time,
    /// Travel time on a 2-D distance/depth slice (s)
    #[default]
    #[serde(rename = "TIME2D")]
    Time2D,
    /// Probability density
    ProbDensity,
    /// Misfit
    Misfit,
    /// 3-D take-off angles
    Angle,
    /// Take-off angles on a 2-D slice
    #[serde(rename = "ANGLE2D")]
    Angle2D,
}

impl GridType {
    /// Every known grid type
    pub const ALL: [GridType; 13] = [
        GridType::Velocity,
        GridType::VelocityMeters,
        GridType::Slowness,
        GridType::Vel2,
        GridType::Slow2,
        GridType::Slow2Meters,
        GridType::SlowLen,
        GridType::Time,
        GridType::Time2D,
        GridType::ProbDensity,
        GridType::Misfit,
        GridType::Angle,
        GridType::Angle2D,
    ];

    /// Header tag for this grid type
    pub fn tag(&self) -> &'static str {
        match self {
            GridType::Velocity => "VELOCITY",
            GridType::VelocityMeters => "VELOCITY_METERS",
            GridType::Slowness => "SLOWNESS",
            GridType::Vel2 => "VEL2",
            GridType::Slow2 => "SLOW2",
            GridType::Slow2Meters => "SLOW2_METERS",
            GridType::SlowLen => "SLOW_LEN",
            GridType::Time => "TIME",
            GridType::Time2D => "TIME2D",
            GridType::ProbDensity => "PROB_DENSITY",
            GridType::Misfit => "MISFIT",
            GridType::Angle => "ANGLE",
            GridType::Angle2D => "ANGLE2D",
        }
    }

    /// True for grids holding travel times
    pub fn is_travel_time(&self) -> bool {
        matches!(self, GridType::Time | GridType::Time2D)
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for GridType {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        GridType::ALL
            .iter()
            .copied()
            .find(|t| t.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| GridError::UnknownGridType(s.to_string()))
    }
}

/// Sample buffer in its stored precision.
///
/// Holding the samples in the declared precision keeps the scalar-type tag
/// and the data in agreement, and makes single-precision grids round-trip
/// through the buffer file bit for bit.
#[derive(Debug, Clone, PartialEq)]
pub enum GridData {
    /// 32-bit samples
    Single(Vec<f32>),
    /// 64-bit samples
    Double(Vec<f64>),
}

impl GridData {
    /// Store `values` at the given precision, rounding to nearest for SINGLE
    pub fn from_f64(scalar_type: ScalarType, values: Vec<f64>) -> Self {
        match scalar_type {
            ScalarType::Single => GridData::Single(values.into_iter().map(|v| v as f32).collect()),
            ScalarType::Double => GridData::Double(values),
        }
    }

    /// Precision of the stored samples
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            GridData::Single(_) => ScalarType::Single,
            GridData::Double(_) => ScalarType::Double,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        match self {
            GridData::Single(v) => v.len(),
            GridData::Double(v) => v.len(),
        }
    }

    /// True when the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the buffer file for these samples
    pub fn byte_len(&self) -> usize {
        self.len() * self.scalar_type().byte_size()
    }

    /// Sample at flat index `i`, widened to f64
    pub fn get(&self, i: usize) -> Option<f64> {
        match self {
            GridData::Single(v) => v.get(i).map(|&x| f64::from(x)),
            GridData::Double(v) => v.get(i).copied(),
        }
    }

    /// Iterate over all samples, widened to f64
    pub fn iter_f64(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            GridData::Single(v) => Box::new(v.iter().map(|&x| f64::from(x))),
            GridData::Double(v) => Box::new(v.iter().copied()),
        }
    }

    /// Bitwise equality, treating identical NaN payloads as equal
    pub fn bit_eq(&self, other: &GridData) -> bool {
        match (self, other) {
            (GridData::Single(a), GridData::Single(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
            }
            (GridData::Double(a), GridData::Double(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
            }
            _ => false,
        }
    }
}
