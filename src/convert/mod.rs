//! Travel-time table to grid conversion
//!
//! Binds one parsed table per seismic phase to the geometry of the sweep it
//! was computed on and writes one grid file pair per phase. The axis
//! convention is fixed:
//!
//! | Axis | Count | Origin | Spacing |
//! |------|-------|--------|---------|
//! | x | 1 | 0 | 0 |
//! | y | distance samples | first distance (km) | distance step (km) |
//! | z | depth samples | first depth (km) | depth step (km) |
//!
//! so the table's row-major `(distance, depth)` values are already in buffer
//! order. Basenames are `<output_dir>/<stem>.<phase>`.
//!
//! Every phase is validated (labels, table shape, basename collisions)
//! before the first file is written.

mod config;
mod error;
mod sequential;

#[cfg(feature = "parallel")]
mod parallel;


use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use log::warn;

use crate::grid::{GridGeometry, GridModel};
use crate::sweep::Sweep;
use crate::table::TravelTimeTable;
use crate::writer::GridWriter;

pub use config::{ConversionConfig, DistanceUnit, KM_PER_DEGREE};
pub use error::ConversionError;

/// Converter from travel-time tables to grid file pairs
#[derive(Debug, Clone)]
pub struct GridConverter {
    config: ConversionConfig,
    writer: GridWriter,
}

/// One validated unit of work
#[derive(Debug)]
struct PhaseJob {
    phase: String,
    table: TravelTimeTable,
    basename: PathBuf,
}

impl GridConverter {
    /// Create a new converter with default configuration
    pub fn new() -> Self {
        Self::with_config(ConversionConfig::default())
    }

    /// Create a new converter with custom configuration
    pub fn with_config(config: ConversionConfig) -> Self {
        let writer = GridWriter::new(config.writer_config.clone());
        Self { config, writer }
    }

    /// Set the output stem
    pub fn with_output_stem(mut self, stem: impl Into<String>) -> Self {
        self.config.output_stem = Some(stem.into());
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Grid geometry for tables computed on `sweep`
    pub fn geometry_for(&self, sweep: &Sweep) -> Result<GridGeometry, ConversionError> {
        let unit = self.config.distance_unit;
        let (nd, nz) = sweep.table_shape();

        Ok(GridGeometry::new(
            [1, nd, nz],
            [0.0, unit.to_km(sweep.distance.start()), sweep.depth.start()],
            [0.0, unit.to_km(sweep.distance.step()), sweep.depth.step()],
        )?)
    }

    /// Basename of the grid pair for `phase` under `stem`
    pub fn basename_for(&self, stem: &str, phase: &str) -> PathBuf {
        self.config.output_dir.join(format!("{}.{}", stem, phase))
    }

    /// Build the grid model for one phase without writing it
    pub fn build_model(
        &self,
        phase: &str,
        table: TravelTimeTable,
        sweep: &Sweep,
    ) -> Result<GridModel, ConversionError> {
        validate_phase(phase)?;
        check_table_shape(phase, &table, sweep)?;
        self.build_checked(phase, table, &self.geometry_for(sweep)?)
    }

    fn build_checked(
        &self,
        phase: &str,
        table: TravelTimeTable,
        geometry: &GridGeometry,
    ) -> Result<GridModel, ConversionError> {
        Ok(GridModel::build(
            table,
            *geometry,
            self.config.scalar_type,
            self.config.grid_type,
            phase,
            self.config.station_label.clone(),
        )?)
    }

    /// Validate every phase and resolve its basename.
    ///
    /// Stem precedence: `out_stem`, then the configured stem, then the
    /// table's model name.
    fn plan(
        &self,
        tables: BTreeMap<String, TravelTimeTable>,
        sweep: &Sweep,
        out_stem: Option<&str>,
    ) -> Result<Vec<PhaseJob>, ConversionError> {
        if tables.is_empty() {
            return Err(ConversionError::NoTables);
        }

        // keyed case-insensitively so pairs stay distinct on any filesystem
        let mut claimed: HashMap<String, String> = HashMap::new();
        let mut jobs = Vec::with_capacity(tables.len());

        for (phase, table) in tables {
            validate_phase(&phase)?;
            check_table_shape(&phase, &table, sweep)?;

            if let Some(table_phase) = table.phase() {
                if table_phase != phase {
                    warn!(
                        "Table for phase {} declares phase {}; using {}",
                        phase, table_phase, phase
                    );
                }
            }

            let stem = out_stem
                .or(self.config.output_stem.as_deref())
                .or(table.model())
                .ok_or_else(|| ConversionError::MissingStem(phase.clone()))?
                .to_string();
            validate_stem(&stem)?;

            let basename = self.basename_for(&stem, &phase);
            let key = basename.to_string_lossy().to_lowercase();
            if let Some(first) = claimed.insert(key, phase.clone()) {
                return Err(ConversionError::DuplicateBasename {
                    first,
                    second: phase,
                    basename,
                });
            }

            jobs.push(PhaseJob {
                phase,
                table,
                basename,
            });
        }

        Ok(jobs)
    }
}

impl Default for GridConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_phase(phase: &str) -> Result<(), ConversionError> {
    let valid = !phase.is_empty()
        && phase != "."
        && phase != ".."
        && !phase
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_whitespace() || c.is_control());
    if valid {
        Ok(())
    } else {
        Err(ConversionError::InvalidPhase(phase.to_string()))
    }
}

fn validate_stem(stem: &str) -> Result<(), ConversionError> {
    let valid = !stem.trim().is_empty()
        && !stem.chars().any(|c| c == '/' || c == '\\' || c.is_control());
    if valid {
        Ok(())
    } else {
        Err(ConversionError::InvalidStem(stem.to_string()))
    }
}

fn check_table_shape(
    phase: &str,
    table: &TravelTimeTable,
    sweep: &Sweep,
) -> Result<(), ConversionError> {
    let (expected_nd, expected_nz) = sweep.table_shape();
    let (nd, nz) = table.shape();
    if (nd, nz) != (expected_nd, expected_nz) {
        return Err(ConversionError::SweepMismatch {
            phase: phase.to_string(),
            expected_nd,
            expected_nz,
            nd,
            nz,
        });
    }
    Ok(())
}
