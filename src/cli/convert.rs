use anyhow::{Context, Result};
use log::info;
#[cfg(not(feature = "parallel"))]
use log::warn;
use std::path::PathBuf;

use ttgrid::convert::{ConversionConfig, DistanceUnit, GridConverter};
use ttgrid::grid::{GridType, ScalarType};
use ttgrid::sweep::{SampleGrid1D, Sweep, MAX_DEPTH_SAMPLES};
use ttgrid::writer::WriterConfig;

use super::config::Config;

/// Parsed arguments of the convert command
pub struct ConvertArgs {
    pub table_dir: PathBuf,
    pub phases: Vec<String>,
    pub distance: SampleGrid1D,
    pub depth: SampleGrid1D,
    pub stem: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub precision: Option<ScalarType>,
    pub distance_unit: Option<DistanceUnit>,
    pub grid_type: Option<GridType>,
    pub station: Option<String>,
    pub with_metadata: bool,
    pub table_extension: Option<String>,
    pub parallel: bool,
}

/// Convert travel-time tables to grid file pairs
pub fn run(args: ConvertArgs) -> Result<()> {
    if !args.table_dir.is_dir() {
        anyhow::bail!("Table directory does not exist: {}", args.table_dir.display());
    }
    if args.depth.len() > MAX_DEPTH_SAMPLES {
        anyhow::bail!(
            "Depth sweep {} has {} samples, at most {} are supported",
            args.depth,
            args.depth.len(),
            MAX_DEPTH_SAMPLES
        );
    }

    let file_config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    let section = file_config.conversion;

    let defaults = ConversionConfig::default();
    let writer_config = if section.sync_to_disk.unwrap_or(false) {
        WriterConfig::durable()
    } else {
        WriterConfig::default()
    };

    let config = ConversionConfig {
        table_dir: args.table_dir.clone(),
        table_extension: args
            .table_extension
            .or(section.table_extension)
            .unwrap_or(defaults.table_extension),
        with_metadata: args.with_metadata || section.with_metadata.unwrap_or(false),
        output_dir: args
            .output_dir
            .or(section.output_dir)
            .unwrap_or(defaults.output_dir),
        output_stem: args.stem.or(section.stem),
        scalar_type: args
            .precision
            .or(section.precision)
            .unwrap_or(defaults.scalar_type),
        grid_type: args
            .grid_type
            .or(section.grid_type)
            .unwrap_or(defaults.grid_type),
        distance_unit: args
            .distance_unit
            .or(section.distance_unit)
            .unwrap_or(defaults.distance_unit),
        station_label: args.station.or(section.station),
        writer_config,
    };
    let parallel = args.parallel || section.parallel.unwrap_or(false);

    let sweep = Sweep::new(args.distance, args.depth);

    info!("ttgrid - travel-time tables to grid files");
    info!("=========================================");
    info!("Tables:   {}", config.table_dir.display());
    info!("Output:   {}", config.output_dir.display());
    info!("Phases:   {}", args.phases.join(", "));
    info!("Distance: {} ({})", sweep.distance, config.distance_unit);
    info!("Depth:    {} (km)", sweep.depth);
    info!("Type:     {} {}", config.grid_type, config.scalar_type);

    let converter = GridConverter::with_config(config);
    let tables = converter
        .load_tables(&args.phases, &sweep)
        .context("Failed to load travel-time tables")?;

    let pairs = if parallel {
        #[cfg(feature = "parallel")]
        {
            converter
                .convert_parallel(tables, &sweep, None)
                .context("Parallel conversion failed")?
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Parallel conversion requested but the parallel feature is disabled; converting sequentially.");
            converter
                .convert(tables, &sweep, None)
                .context("Conversion failed")?
        }
    } else {
        converter
            .convert(tables, &sweep, None)
            .context("Conversion failed")?
    };

    for pair in &pairs {
        println!("{}", pair);
    }

    Ok(())
}
