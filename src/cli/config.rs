//! TOML configuration file support.
//!
//! Settings that stay the same across runs can live in a config file instead
//! of being repeated on every command line. Flags given on the command line
//! take precedence.
//!
//! ```toml
//! # ttgrid.toml
//! [conversion]
//! output_dir = "grids"
//! stem = "iasp91"
//! with_metadata = true
//! precision = "SINGLE"
//! grid_type = "TIME2D"
//! distance_unit = "deg"
//! station = "ANMO"
//! sync_to_disk = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use ttgrid::convert::DistanceUnit;
use ttgrid::grid::{GridType, ScalarType};

/// Root configuration structure for ttgrid.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionSection,
}

/// Configuration for the convert command.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionSection {
    /// Extension of the table files (default `txt`).
    pub table_extension: Option<String>,

    /// Whether table files start with the phase/model header.
    pub with_metadata: Option<bool>,

    /// Directory receiving the grid file pairs.
    pub output_dir: Option<PathBuf>,

    /// Basename stem.
    pub stem: Option<String>,

    /// Buffer precision.
    pub precision: Option<ScalarType>,

    /// Grid type tag.
    pub grid_type: Option<GridType>,

    /// Unit of the distance sweep.
    pub distance_unit: Option<DistanceUnit>,

    /// Station label.
    pub station: Option<String>,

    /// Convert phases in parallel (requires the parallel feature).
    pub parallel: Option<bool>,

    /// fsync files before they are renamed into place.
    pub sync_to_disk: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
