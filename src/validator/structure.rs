use crate::format::GridFilePair;

use super::{ValidationCheck, ValidationReport};

/// Step 1: both files of the pair exist. Returns false if either is missing.
pub(crate) fn check_structure(pair: &GridFilePair, report: &mut ValidationReport) -> bool {
    let mut complete = true;

    for (name, path) in [
        ("Header file present", pair.header_path()),
        ("Buffer file present", pair.buffer_path()),
    ] {
        if path.is_file() {
            report.add_check(ValidationCheck::ok(name));
        } else {
            complete = false;
            report.add_check(ValidationCheck::failed(
                name,
                format!("{} not found", path.display()),
            ));
        }
    }

    complete
}
