//! # ttgrid - Travel-Time Tables as 3-D Grid Files
//!
//! `ttgrid` turns tabulated seismic travel times (one value per line,
//! distance-major, as printed by a travel-time calculator) into regular
//! 3-D grids persisted as a text header plus a raw binary buffer, the file
//! convention read by grid-based earthquake location tools.
//!
//! ## Key Features
//!
//! - **Strict table parsing**: the expected `(distance, depth)` shape is a
//!   required input; row-count and value errors carry line numbers.
//!
//! - **Validated grid model**: shape, origin and spacing are checked once at
//!   construction, so a [`grid::GridModel`] that exists is consistent.
//!
//! - **Atomic file pairs**: buffers and headers are staged in temporary
//!   files and renamed into place; a header never points at a missing or
//!   partial buffer.
//!
//! - **Bit-exact round trip**: origins and spacings are written with
//!   shortest round-trip formatting and samples in native byte order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//!
//! use ttgrid::convert::{ConversionConfig, GridConverter};
//! use ttgrid::sweep::{SampleGrid1D, Sweep};
//! use ttgrid::table::TableParser;
//!
//! let sweep = Sweep::new(
//!     "0:1000:10".parse::<SampleGrid1D>()?,
//!     "0:400:5".parse::<SampleGrid1D>()?,
//! );
//! let (nd, nz) = sweep.table_shape();
//!
//! let mut tables = BTreeMap::new();
//! tables.insert("P".to_string(), TableParser::new(nd, nz).from_file("tables/P.txt")?);
//! tables.insert("S".to_string(), TableParser::new(nd, nz).from_file("tables/S.txt")?);
//!
//! let config = ConversionConfig {
//!     output_dir: "grids".into(),
//!     ..Default::default()
//! };
//! let pairs = GridConverter::with_config(config).convert(tables, &sweep, Some("iasp91"))?;
//! for pair in &pairs {
//!     println!("wrote {}", pair);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! This writes:
//! ```text
//! grids/
//! ├── iasp91.P.hdr   # 7-line text header
//! ├── iasp91.P.buf   # nx*ny*nz native-endian floats, z fastest
//! ├── iasp91.S.hdr
//! └── iasp91.S.buf
//! ```
//!
//! ## Architecture
//!
//! - [`sweep`]: evenly spaced distance and depth sample axes
//! - [`table`]: travel-time table parser
//! - [`grid`]: validated in-memory grid model
//! - [`format`]: on-disk header layout and file naming
//! - [`writer`] / [`reader`]: grid file pair persistence
//! - [`convert`]: per-phase table-to-grid orchestration
//! - [`validator`]: integrity checks for an existing pair

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod format;
pub mod grid;
pub mod reader;
pub mod sweep;
pub mod table;
pub mod validator;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::convert::{ConversionConfig, ConversionError, DistanceUnit, GridConverter};
    pub use crate::format::GridFilePair;
    pub use crate::grid::{GridData, GridGeometry, GridModel, GridType, ScalarType};
    pub use crate::reader::{read_grid, read_header, GridReader, ReaderError};
    pub use crate::sweep::{SampleGrid1D, Sweep};
    pub use crate::table::{TableError, TableParser, TravelTimeTable};
    pub use crate::validator::{validate_grid_pair, ValidationReport};
    pub use crate::writer::{write_grid, GridWriter, WriterConfig, WriterError};
}
