use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::grid::{GridType, ScalarType};
use crate::writer::WriterConfig;

/// Kilometers per degree of arc on a sphere of radius 6371 km
pub const KM_PER_DEGREE: f64 = 6371.0 * std::f64::consts::PI / 180.0;

/// Unit of the distance sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers (no conversion)
    #[default]
    #[serde(alias = "km")]
    Kilometers,
    /// Degrees of arc
    #[serde(alias = "deg")]
    Degrees,
}

impl DistanceUnit {
    /// Convert a distance in this unit to kilometers
    pub fn to_km(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => value,
            DistanceUnit::Degrees => value * KM_PER_DEGREE,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Kilometers => write!(f, "km"),
            DistanceUnit::Degrees => write!(f, "deg"),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "km" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "deg" | "degrees" => Ok(DistanceUnit::Degrees),
            _ => Err(format!("Unknown distance unit '{}'. Valid options: km, deg", s)),
        }
    }
}

/// Configuration for a conversion run.
///
/// Every location the converter touches comes from here; nothing is taken
/// from the environment or the working directory implicitly.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Directory holding one `<phase>.<table_extension>` file per phase
    pub table_dir: PathBuf,

    /// Extension of the table files
    pub table_extension: String,

    /// Whether table files start with the phase/model header
    pub with_metadata: bool,

    /// Directory receiving the grid file pairs
    pub output_dir: PathBuf,

    /// Basename stem; falls back to the table's model name when absent
    pub output_stem: Option<String>,

    /// Precision of the written buffers
    pub scalar_type: ScalarType,

    /// Grid type tag written to the headers
    pub grid_type: GridType,

    /// Unit of the distance sweep
    pub distance_unit: DistanceUnit,

    /// Station label written to the headers
    pub station_label: Option<String>,

    /// Grid writer configuration
    pub writer_config: WriterConfig,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            table_dir: PathBuf::from("."),
            table_extension: "txt".to_string(),
            with_metadata: false,
            output_dir: PathBuf::from("."),
            output_stem: None,
            scalar_type: ScalarType::Single,
            grid_type: GridType::Time2D,
            distance_unit: DistanceUnit::Kilometers,
            station_label: None,
            writer_config: WriterConfig::default(),
        }
    }
}
