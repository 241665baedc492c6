//! # Grid File Pair Validation
//!
//! Inspects a basename and reports whether it holds a complete, consistent
//! grid file pair. Every problem becomes a check in the report instead of an
//! early error, so one run lists everything wrong with a pair.
//!
//! ## Validation Checklist
//!
//! 1. **Structure**: both `<basename>.hdr` and `<basename>.buf` exist
//! 2. **Header**: the header decodes into a valid geometry and tag set
//! 3. **Buffer size**: the buffer holds exactly `nx * ny * nz` samples
//! 4. **Data sanity**: samples are finite (non-finite values are a warning)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ttgrid::validator::validate_grid_pair;
//!
//! let report = validate_grid_pair("out/iasp91.P");
//! println!("{}", report);
//! if report.has_failures() {
//!     std::process::exit(1);
//! }
//! ```

use std::path::Path;

use crate::format::GridFilePair;

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod data;
mod report;
mod structure;

#[cfg(test)]
mod tests;

/// Validate the grid file pair at `basename`.
///
/// Later steps are skipped once an earlier one fails, since they depend on
/// its result.
pub fn validate_grid_pair<P: AsRef<Path>>(basename: P) -> ValidationReport {
    let pair = GridFilePair::from_basename(basename);
    let mut report = ValidationReport::new(pair.to_string());

    // 1. Structure
    if !structure::check_structure(&pair, &mut report) {
        return report;
    }

    // 2. Header
    let Some(reader) = data::check_header(&pair, &mut report) else {
        return report;
    };

    // 3. Buffer size, 4. Data sanity
    if data::check_buffer_size(&reader, &mut report) {
        data::check_data_sanity(&reader, &mut report);
    }

    report
}
