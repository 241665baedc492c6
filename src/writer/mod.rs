//! # Grid Writer Module
//!
//! Persists a [`GridModel`](crate::grid::GridModel) as a grid file pair (see
//! [`format`](crate::format) for the layout).
//!
//! ## Commit Order
//!
//! 1. The buffer is written to a temporary file in the destination directory
//!    and its size is checked against `nx * ny * nz * sizeof(scalar)`.
//! 2. The header is written to a second temporary file.
//! 3. Any existing header at the basename is removed.
//! 4. The buffer, then the header, are renamed into place.
//!
//! A failure before step 4 leaves the previous pair untouched (or absent);
//! a failure during step 4 leaves a buffer without a header, which readers
//! treat as an incomplete pair. Temporary files are deleted on drop.
//!
//! ```rust,no_run
//! use ttgrid::grid::{GridGeometry, GridModel, GridType, ScalarType};
//! use ttgrid::table::TravelTimeTable;
//! use ttgrid::writer::{GridWriter, WriterConfig};
//!
//! let table = TravelTimeTable::from_values(1, 2, vec![0.0, 1.0])?;
//! let geometry = GridGeometry::new([1, 1, 2], [0.0; 3], [0.0, 0.0, 1.0])?;
//! let model = GridModel::build(table, geometry, ScalarType::Single, GridType::Time2D, "P", None)?;
//!
//! let pair = GridWriter::new(WriterConfig::durable()).write(&model, "out/iasp91.P")?;
//! println!("wrote {}", pair);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod writer_impl;


pub use config::WriterConfig;
pub use error::WriterError;
pub use writer_impl::{write_grid, GridWriter};
