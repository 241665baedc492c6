use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ttgrid::convert::DistanceUnit;
use ttgrid::grid::{GridType, ScalarType};
use ttgrid::sweep::SampleGrid1D;

mod config;
mod convert;
mod info;
mod validate;

use convert::ConvertArgs;

/// ttgrid - travel-time tables to 3-D grid file pairs
#[derive(Parser)]
#[command(name = "ttgrid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Buffer precision.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PrecisionArg {
    /// 32-bit floats
    Single,
    /// 64-bit floats
    Double,
}

impl From<PrecisionArg> for ScalarType {
    fn from(arg: PrecisionArg) -> Self {
        match arg {
            PrecisionArg::Single => ScalarType::Single,
            PrecisionArg::Double => ScalarType::Double,
        }
    }
}

/// Unit of the distance sweep.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DistanceUnitArg {
    /// Kilometers
    Km,
    /// Degrees of arc, converted to kilometers in the header
    Deg,
}

impl From<DistanceUnitArg> for DistanceUnit {
    fn from(arg: DistanceUnitArg) -> Self {
        match arg {
            DistanceUnitArg::Km => DistanceUnit::Kilometers,
            DistanceUnitArg::Deg => DistanceUnit::Degrees,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert per-phase travel-time tables to grid file pairs
    Convert {
        /// Directory holding one <PHASE>.txt table per phase
        #[arg(value_name = "TABLE_DIR")]
        table_dir: PathBuf,

        /// Phases to convert, comma separated
        #[arg(short = 'p', long, value_delimiter = ',', required = true)]
        phases: Vec<String>,

        /// Distance sweep as min:max:step
        #[arg(short = 'd', long, value_name = "MIN:MAX:STEP")]
        distance: SampleGrid1D,

        /// Depth sweep in km as min:max:step
        #[arg(short = 'z', long, value_name = "MIN:MAX:STEP")]
        depth: SampleGrid1D,

        /// Basename stem (defaults to the model name in the table header)
        #[arg(short = 's', long)]
        stem: Option<String>,

        /// Output directory (default: current directory)
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Buffer precision
        #[arg(long, value_enum)]
        precision: Option<PrecisionArg>,

        /// Unit of the distance sweep
        #[arg(long, value_enum)]
        distance_unit: Option<DistanceUnitArg>,

        /// Grid type tag written to the headers (default TIME2D)
        #[arg(long, value_name = "TAG")]
        grid_type: Option<GridType>,

        /// Station label written to the headers
        #[arg(long)]
        station: Option<String>,

        /// Table files start with `phase:` and `model:` header lines
        #[arg(long)]
        with_metadata: bool,

        /// Extension of the table files
        #[arg(long, value_name = "EXT")]
        table_extension: Option<String>,

        /// Convert phases in parallel (requires the parallel feature)
        #[arg(long)]
        parallel: bool,
    },

    /// Display the header of a grid file pair
    Info {
        /// Basename of the pair (without .hdr/.buf)
        #[arg(value_name = "BASENAME")]
        basename: PathBuf,

        /// Print the header as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a grid file pair
    Validate {
        /// Basename of the pair (without .hdr/.buf)
        #[arg(value_name = "BASENAME")]
        basename: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            table_dir,
            phases,
            distance,
            depth,
            stem,
            output_dir,
            config,
            precision,
            distance_unit,
            grid_type,
            station,
            with_metadata,
            table_extension,
            parallel,
        } => convert::run(ConvertArgs {
            table_dir,
            phases,
            distance,
            depth,
            stem,
            output_dir,
            config,
            precision: precision.map(ScalarType::from),
            distance_unit: distance_unit.map(DistanceUnit::from),
            grid_type,
            station,
            with_metadata,
            table_extension,
            parallel,
        }),
        Commands::Info { basename, json } => info::run(basename, json),
        Commands::Validate { basename, json } => validate::run(basename, json),
    }
}
