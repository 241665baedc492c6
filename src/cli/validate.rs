use anyhow::Result;
use log::info;
use std::path::PathBuf;

use ttgrid::validator::validate_grid_pair;

/// Validate a grid file pair
pub fn run(basename: PathBuf, json: bool) -> Result<()> {
    info!("ttgrid Validator");
    info!("================");
    info!("Basename: {}", basename.display());

    let report = validate_grid_pair(&basename);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        // plain text when the colorized_output feature is off
        println!("{}", report.format_colored());
    }

    // Exit with error code if validation failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
