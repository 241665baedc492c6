//! # Grid Reader Module
//!
//! Loads grid file pairs written by [`GridWriter`](crate::writer::GridWriter).
//! The header is decoded first; the buffer is only read once its size on
//! disk matches `nx * ny * nz * sizeof(scalar)` exactly. Short or long
//! buffers are rejected, never truncated or padded.
//!
//! ```rust,no_run
//! use ttgrid::reader::GridReader;
//!
//! let reader = GridReader::open("out/iasp91.P")?;
//! println!("{} grid for phase {}", reader.header().grid_type(), reader.header().wave_label());
//!
//! let model = reader.into_model()?;
//! println!("{:?}", model.value(0, 10, 5));
//! # Ok::<(), ttgrid::reader::ReaderError>(())
//! ```

mod error;


use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use byteorder::{ByteOrder, NativeEndian};
use log::debug;

use crate::format::{decode_header, GridFilePair};
use crate::grid::{GridData, GridHeader, GridModel, ScalarType};

pub use error::ReaderError;

/// Reader for one grid file pair
#[derive(Debug, Clone)]
pub struct GridReader {
    pair: GridFilePair,
    header: GridHeader,
}

impl GridReader {
    /// Open the pair at `basename` and decode its header.
    ///
    /// Fails with [`ReaderError::MissingFile`] unless both files exist.
    pub fn open<P: AsRef<Path>>(basename: P) -> Result<Self, ReaderError> {
        let pair = GridFilePair::from_basename(basename);
        for path in [pair.header_path(), pair.buffer_path()] {
            if !path.is_file() {
                return Err(ReaderError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
        }

        let text = fs::read_to_string(pair.header_path())?;
        let header = decode_header(&text).map_err(|source| ReaderError::HeaderParse {
            path: pair.header_path().to_path_buf(),
            source,
        })?;

        debug!("Opened {}", pair);
        Ok(Self { pair, header })
    }

    /// Decoded header
    pub fn header(&self) -> &GridHeader {
        &self.header
    }

    /// Paths of the two files
    pub fn pair(&self) -> &GridFilePair {
        &self.pair
    }

    /// Check the buffer file size against the header without reading it
    pub fn check_buffer_size(&self) -> Result<u64, ReaderError> {
        let expected = self.header.buffer_byte_len() as u64;
        let actual = fs::metadata(self.pair.buffer_path())?.len();
        self.size_check(expected, actual)?;
        Ok(actual)
    }

    /// Read the sample buffer
    pub fn read_data(&self) -> Result<GridData, ReaderError> {
        let expected = self.check_buffer_size()?;

        let mut bytes = Vec::with_capacity(expected as usize);
        File::open(self.pair.buffer_path())?.read_to_end(&mut bytes)?;
        // the file may have changed since the metadata check
        self.size_check(expected, bytes.len() as u64)?;

        Ok(decode_samples(self.header.scalar_type(), &bytes))
    }

    /// Read the buffer and assemble the full model
    pub fn into_model(self) -> Result<GridModel, ReaderError> {
        let data = self.read_data()?;
        Ok(GridModel::from_parts(self.header, data)?)
    }

    fn size_check(&self, expected: u64, actual: u64) -> Result<(), ReaderError> {
        if expected != actual {
            return Err(ReaderError::BufferSize {
                path: self.pair.buffer_path().to_path_buf(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}

/// Read the grid stored at `basename`
pub fn read_grid<P: AsRef<Path>>(basename: P) -> Result<GridModel, ReaderError> {
    GridReader::open(basename)?.into_model()
}

/// Read only the header of the grid stored at `basename`
pub fn read_header<P: AsRef<Path>>(basename: P) -> Result<GridHeader, ReaderError> {
    let pair = GridFilePair::from_basename(basename);
    let text = fs::read_to_string(pair.header_path()).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReaderError::MissingFile {
            path: pair.header_path().to_path_buf(),
        },
        _ => ReaderError::IoError(e),
    })?;

    decode_header(&text).map_err(|source| ReaderError::HeaderParse {
        path: pair.header_path().to_path_buf(),
        source,
    })
}

/// Interpret native-endian bytes; `bytes.len()` must match the sample width
fn decode_samples(scalar_type: ScalarType, bytes: &[u8]) -> GridData {
    match scalar_type {
        ScalarType::Single => {
            let mut values = vec![0f32; bytes.len() / 4];
            NativeEndian::read_f32_into(bytes, &mut values);
            GridData::Single(values)
        }
        ScalarType::Double => {
            let mut values = vec![0f64; bytes.len() / 8];
            NativeEndian::read_f64_into(bytes, &mut values);
            GridData::Double(values)
        }
    }
}
