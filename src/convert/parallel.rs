use std::collections::BTreeMap;

use log::info;
use rayon::prelude::*;

use crate::format::GridFilePair;
use crate::sweep::Sweep;
use crate::table::TravelTimeTable;

use super::{ConversionError, GridConverter};

impl GridConverter {
    /// Convert phases concurrently, one rayon task per phase.
    ///
    /// Planning rejects colliding basenames up front, so every task owns its
    /// output files. Pairs are returned in phase order; if any phase fails
    /// the first error (in phase order) is returned.
    pub fn convert_parallel(
        &self,
        tables: BTreeMap<String, TravelTimeTable>,
        sweep: &Sweep,
        out_stem: Option<&str>,
    ) -> Result<Vec<GridFilePair>, ConversionError> {
        let geometry = self.geometry_for(sweep)?;
        let jobs = self.plan(tables, sweep, out_stem)?;

        info!(
            "Converting {} phase(s) in parallel ({} threads)",
            jobs.len(),
            rayon::current_num_threads()
        );

        let results: Vec<Result<GridFilePair, ConversionError>> = jobs
            .into_par_iter()
            .map(|job| {
                let model = self.build_checked(&job.phase, job.table, &geometry)?;
                let pair = self.writer.write(&model, &job.basename)?;
                info!("  {} -> {}", job.phase, pair);
                Ok(pair)
            })
            .collect();

        results.into_iter().collect()
    }
}
