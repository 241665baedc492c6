use crate::format::GridFilePair;
use crate::reader::{GridReader, ReaderError};

use super::{ValidationCheck, ValidationReport};

/// Step 2: the header decodes
pub(crate) fn check_header(
    pair: &GridFilePair,
    report: &mut ValidationReport,
) -> Option<GridReader> {
    match GridReader::open(pair.basename()) {
        Ok(reader) => {
            let header = reader.header();
            let [nx, ny, nz] = header.geometry().counts();
            report.add_check(ValidationCheck::ok(format!(
                "Header valid ({}x{}x{} {} {}, phase {})",
                nx,
                ny,
                nz,
                header.scalar_type(),
                header.grid_type(),
                header.wave_label()
            )));

            if !header.grid_type().is_travel_time() {
                report.add_check(ValidationCheck::warning(
                    "Grid type",
                    format!("{} is not a travel-time grid", header.grid_type()),
                ));
            }
            Some(reader)
        }
        Err(ReaderError::HeaderParse { source, .. }) => {
            report.add_check(ValidationCheck::failed("Header valid", source.to_string()));
            None
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("Header valid", e.to_string()));
            None
        }
    }
}

/// Step 3: the buffer size agrees with the header
pub(crate) fn check_buffer_size(reader: &GridReader, report: &mut ValidationReport) -> bool {
    match reader.check_buffer_size() {
        Ok(bytes) => {
            report.add_check(ValidationCheck::ok(format!("Buffer size ({} bytes)", bytes)));
            true
        }
        Err(ReaderError::BufferSize {
            expected, actual, ..
        }) => {
            report.add_check(ValidationCheck::failed(
                "Buffer size",
                format!("expected {} bytes, found {}", expected, actual),
            ));
            false
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("Buffer size", e.to_string()));
            false
        }
    }
}

/// Step 4: samples are finite
pub(crate) fn check_data_sanity(reader: &GridReader, report: &mut ValidationReport) {
    let data = match reader.read_data() {
        Ok(data) => data,
        Err(e) => {
            report.add_check(ValidationCheck::failed("Buffer readable", e.to_string()));
            return;
        }
    };

    let non_finite = data.iter_f64().filter(|v| !v.is_finite()).count();
    if non_finite == 0 {
        report.add_check(ValidationCheck::ok("Sample values finite"));
    } else {
        report.add_check(ValidationCheck::warning(
            "Sample values finite",
            format!("{} of {} samples are NaN or infinite", non_finite, data.len()),
        ));
    }
}
