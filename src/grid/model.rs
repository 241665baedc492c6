use serde::Serialize;

use crate::table::TravelTimeTable;

use super::{GridData, GridError, GridGeometry, GridType, ScalarType};

/// Everything persisted in a grid header: geometry plus type tags and labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridHeader {
    geometry: GridGeometry,
    scalar_type: ScalarType,
    grid_type: GridType,
    wave_label: String,
    station_label: Option<String>,
}

impl GridHeader {
    /// Validate labels and assemble a header.
    ///
    /// The wave label must be a non-empty single line without surrounding
    /// whitespace. An empty station label is treated as absent.
    pub fn new(
        geometry: GridGeometry,
        scalar_type: ScalarType,
        grid_type: GridType,
        wave_label: impl Into<String>,
        station_label: Option<String>,
    ) -> Result<Self, GridError> {
        let wave_label = wave_label.into();
        if wave_label.is_empty() || !is_single_line(&wave_label) {
            return Err(GridError::InvalidLabel {
                field: "wave",
                value: wave_label,
            });
        }

        let station_label = station_label.filter(|s| !s.is_empty());
        if let Some(station) = &station_label {
            if !is_single_line(station) {
                return Err(GridError::InvalidLabel {
                    field: "station",
                    value: station.clone(),
                });
            }
        }

        Ok(Self {
            geometry,
            scalar_type,
            grid_type,
            wave_label,
            station_label,
        })
    }

    /// Grid shape, origin and spacing
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Precision of the buffer samples
    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    /// Semantic grid kind
    pub fn grid_type(&self) -> GridType {
        self.grid_type
    }

    /// Seismic phase label
    pub fn wave_label(&self) -> &str {
        &self.wave_label
    }

    /// Station label, if any
    pub fn station_label(&self) -> Option<&str> {
        self.station_label.as_deref()
    }

    /// Exact size of the matching buffer file
    pub fn buffer_byte_len(&self) -> usize {
        self.geometry.sample_count() * self.scalar_type.byte_size()
    }
}

fn is_single_line(label: &str) -> bool {
    !label.contains(['\n', '\r']) && label.trim() == label
}

/// A regular 3-D grid of samples together with its header.
///
/// A `GridModel` can only be obtained from [`GridModel::build`] or
/// [`GridModel::from_parts`], both of which check that the axis counts
/// account for every sample; there is no way to hold a model whose geometry
/// and buffer disagree. Samples are ordered with z varying fastest, then y,
/// then x.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    header: GridHeader,
    data: GridData,
}

impl GridModel {
    /// Bind a travel-time table to a geometry.
    ///
    /// The table's row-major `(distance, depth)` values are taken over as the
    /// z-fastest buffer unchanged; only the total count must agree with
    /// `nx * ny * nz`. Values are stored at `scalar_type` precision.
    pub fn build(
        table: TravelTimeTable,
        geometry: GridGeometry,
        scalar_type: ScalarType,
        grid_type: GridType,
        wave_label: impl Into<String>,
        station_label: Option<String>,
    ) -> Result<Self, GridError> {
        let header = GridHeader::new(geometry, scalar_type, grid_type, wave_label, station_label)?;
        check_sample_count(&geometry, table.values().len())?;

        let data = GridData::from_f64(scalar_type, table.into_values());
        Self::from_parts(header, data)
    }

    /// Assemble a model from a header and a sample buffer
    pub fn from_parts(header: GridHeader, data: GridData) -> Result<Self, GridError> {
        check_sample_count(&header.geometry, data.len())?;

        // the buffer precision is authoritative
        let header = GridHeader {
            scalar_type: data.scalar_type(),
            ..header
        };

        Ok(Self { header, data })
    }

    /// Header fields
    pub fn header(&self) -> &GridHeader {
        &self.header
    }

    /// Grid shape, origin and spacing
    pub fn geometry(&self) -> &GridGeometry {
        &self.header.geometry
    }

    /// Precision of the stored samples
    pub fn scalar_type(&self) -> ScalarType {
        self.data.scalar_type()
    }

    /// Semantic grid kind
    pub fn grid_type(&self) -> GridType {
        self.header.grid_type
    }

    /// Seismic phase label
    pub fn wave_label(&self) -> &str {
        &self.header.wave_label
    }

    /// Station label, if any
    pub fn station_label(&self) -> Option<&str> {
        self.header.station_label()
    }

    /// Sample buffer
    pub fn data(&self) -> &GridData {
        &self.data
    }

    /// Buffer offset of grid node `(ix, iy, iz)`
    pub fn index_of(&self, ix: usize, iy: usize, iz: usize) -> Option<usize> {
        self.geometry().index_of(ix, iy, iz)
    }

    /// Sample at grid node `(ix, iy, iz)`
    pub fn value(&self, ix: usize, iy: usize, iz: usize) -> Option<f64> {
        self.index_of(ix, iy, iz).and_then(|i| self.data.get(i))
    }

    /// Compare headers field by field and buffers bit by bit
    pub fn bit_eq(&self, other: &GridModel) -> bool {
        self.header == other.header && self.data.bit_eq(&other.data)
    }

    /// Split into header and buffer
    pub fn into_parts(self) -> (GridHeader, GridData) {
        (self.header, self.data)
    }
}

fn check_sample_count(geometry: &GridGeometry, actual: usize) -> Result<(), GridError> {
    let expected = geometry.sample_count();
    if expected != actual {
        let [nx, ny, nz] = geometry.counts();
        return Err(GridError::GeometryMismatch {
            nx,
            ny,
            nz,
            expected,
            actual,
        });
    }
    Ok(())
}
