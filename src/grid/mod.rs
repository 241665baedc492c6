//! # Grid Model
//!
//! In-memory form of a regular 3-D sampled scalar field. A grid carries its
//! shape, physical origin and spacing (kilometers), a precision tag, a
//! semantic type tag, the seismic phase it describes and optionally the
//! station it was computed for.
//!
//! A 2-D travel-time table is stored as a 3-D grid with a single-sample x
//! axis:
//!
//! ```rust
//! use ttgrid::grid::{GridGeometry, GridModel, GridType, ScalarType};
//! use ttgrid::table::TravelTimeTable;
//!
//! let table = TravelTimeTable::from_values(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])?;
//! let geometry = GridGeometry::new([1, 2, 3], [0.0, 0.0, 0.0], [0.0, 10.0, 5.0])?;
//!
//! let model = GridModel::build(table, geometry, ScalarType::Double, GridType::Time2D, "P", None)?;
//! assert_eq!(model.value(0, 1, 2), Some(5.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod geometry;
mod model;
mod types;

#[cfg(test)]
mod tests;

pub use error::GridError;
pub use geometry::GridGeometry;
pub use model::{GridHeader, GridModel};
pub use types::{GridData, GridType, ScalarType};
