//! # ttgrid
//!
//! Command-line front end for the `ttgrid` library. It never runs the
//! travel-time calculator itself; it converts table files that already exist
//! on disk and inspects the grid file pairs it writes.
//!
//! ## Usage
//!
//! ```bash
//! # One <phase>.txt table per phase in tables/
//! ttgrid convert tables/ --phases P,S --distance 0:1000:10 --depth 0:400:5 --stem iasp91 -o grids
//!
//! # Inspect and check the result
//! ttgrid info grids/iasp91.P
//! ttgrid validate grids/iasp91.S
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
