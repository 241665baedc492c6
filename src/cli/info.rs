use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use ttgrid::format::GridFilePair;
use ttgrid::grid::GridHeader;
use ttgrid::reader::read_header;

#[derive(Serialize)]
struct InfoOutput<'a> {
    header_path: String,
    buffer_path: String,
    buffer_bytes: Option<u64>,
    #[serde(flatten)]
    header: &'a GridHeader,
}

/// Display the header of a grid file pair
pub fn run(basename: PathBuf, json: bool) -> Result<()> {
    let pair = GridFilePair::from_basename(&basename);
    let header = read_header(&basename)
        .with_context(|| format!("Failed to read header of {}", pair))?;
    let buffer_bytes = std::fs::metadata(pair.buffer_path()).ok().map(|m| m.len());

    if json {
        let output = InfoOutput {
            header_path: pair.header_path().display().to_string(),
            buffer_path: pair.buffer_path().display().to_string(),
            buffer_bytes,
            header: &header,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let geometry = header.geometry();
    let [nx, ny, nz] = geometry.counts();
    let [ox, oy, oz] = geometry.origin();
    let [dx, dy, dz] = geometry.spacing();

    println!("Grid File Information");
    println!("=====================");
    println!("Pair: {}", pair);
    println!();

    println!("Geometry:");
    println!("  Samples: {} x {} x {} ({} total)", nx, ny, nz, geometry.sample_count());
    println!("  Origin:  {} {} {} (km)", ox, oy, oz);
    println!("  Spacing: {} {} {} (km)", dx, dy, dz);
    println!();

    println!("Tags:");
    println!("  Precision: {}", header.scalar_type());
    println!("  Grid type: {}", header.grid_type());
    println!("  Phase:     {}", header.wave_label());
    println!("  Station:   {}", header.station_label().unwrap_or("<none>"));
    println!();

    let expected = header.buffer_byte_len();
    match buffer_bytes {
        Some(actual) if actual == expected as u64 => {
            println!("Buffer: {} bytes", actual);
        }
        Some(actual) => {
            println!("Buffer: {} bytes (header requires {})", actual, expected);
        }
        None => println!("Buffer: missing (header requires {} bytes)", expected),
    }

    Ok(())
}
