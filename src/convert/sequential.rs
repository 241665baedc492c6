use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info};

use crate::format::GridFilePair;
use crate::sweep::Sweep;
use crate::table::{TableParser, TravelTimeTable};

use super::{ConversionError, GridConverter};

impl GridConverter {
    /// Path of the table file for `phase` in the configured table directory
    pub fn table_path(&self, phase: &str) -> PathBuf {
        self.config
            .table_dir
            .join(format!("{}.{}", phase, self.config.table_extension))
    }

    /// Load the table of every phase from the configured table directory
    pub fn load_tables<S: AsRef<str>>(
        &self,
        phases: &[S],
        sweep: &Sweep,
    ) -> Result<BTreeMap<String, TravelTimeTable>, ConversionError> {
        let (nd, nz) = sweep.table_shape();
        let parser = TableParser::new(nd, nz).with_metadata(self.config.with_metadata);

        let mut tables = BTreeMap::new();
        for phase in phases {
            let phase = phase.as_ref();
            let path = self.table_path(phase);
            debug!("Loading table for phase {} from {}", phase, path.display());

            let table = parser
                .from_file(&path)
                .map_err(|source| ConversionError::TableLoad { path, source })?;
            tables.insert(phase.to_string(), table);
        }

        Ok(tables)
    }

    /// Convert one table per phase into grid file pairs.
    ///
    /// All phases are validated before anything is written. A write failure
    /// stops the run; pairs already written remain complete and readable.
    pub fn convert(
        &self,
        tables: BTreeMap<String, TravelTimeTable>,
        sweep: &Sweep,
        out_stem: Option<&str>,
    ) -> Result<Vec<GridFilePair>, ConversionError> {
        let start_time = Instant::now();
        let geometry = self.geometry_for(sweep)?;
        let jobs = self.plan(tables, sweep, out_stem)?;

        info!(
            "Converting {} phase(s) on {} x {} sweep",
            jobs.len(),
            sweep.distance,
            sweep.depth
        );

        let mut pairs = Vec::with_capacity(jobs.len());
        for job in jobs {
            let model = self.build_checked(&job.phase, job.table, &geometry)?;
            let pair = self.writer.write(&model, &job.basename)?;
            info!("  {} -> {}", job.phase, pair);
            pairs.push(pair);
        }

        info!(
            "Wrote {} grid(s) in {:.2}s",
            pairs.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(pairs)
    }

    /// Load every phase's table and convert it
    pub fn convert_files<S: AsRef<str>>(
        &self,
        phases: &[S],
        sweep: &Sweep,
    ) -> Result<Vec<GridFilePair>, ConversionError> {
        let tables = self.load_tables(phases, sweep)?;
        self.convert(tables, sweep, None)
    }
}
