//! # Grid File Pair Format
//!
//! A grid is persisted as two files sharing a basename:
//!
//! ```text
//! <basename>.hdr    # ASCII header, one property per line
//! <basename>.buf    # raw samples, no header or footer
//! ```
//!
//! ## Header
//!
//! Seven `\n`-terminated lines in this fixed order:
//!
//! | Line | Content | Example |
//! |------|---------|---------|
//! | 1 | `nx ny nz` | `1 101 41` |
//! | 2 | `origin_x origin_y origin_z` (km) | `0.0 0.0 0.0` |
//! | 3 | `spacing_x spacing_y spacing_z` (km) | `0.0 1.0 1.0` |
//! | 4 | scalar type, `SINGLE` or `DOUBLE` | `SINGLE` |
//! | 5 | grid type | `TIME2D` |
//! | 6 | wave (phase) label | `P` |
//! | 7 | station label, empty if absent | |
//!
//! Floats are written in shortest round-trip form, so reading a header back
//! reproduces every field exactly.
//!
//! ## Buffer
//!
//! `nx * ny * nz` consecutive IEEE 754 samples of the declared width in the
//! native byte order of the writing host (little-endian on every supported
//! target). Sample `(ix, iy, iz)` is at index `(ix * ny + iy) * nz + iz`, i.e.
//! z varies fastest, then y, then x. The file size is exactly
//! `nx * ny * nz * sizeof(scalar)`.

mod header;


use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

pub use header::{decode_header, encode_header, HeaderError};

/// File extension of the header file
pub const HEADER_EXTENSION: &str = "hdr";

/// File extension of the buffer file
pub const BUFFER_EXTENSION: &str = "buf";

/// Number of lines in a header file
pub const HEADER_LINES: usize = 7;

/// Paths of the two files that make up one persisted grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridFilePair {
    basename: PathBuf,
    header_path: PathBuf,
    buffer_path: PathBuf,
}

impl GridFilePair {
    /// Derive the header and buffer paths for `basename`.
    ///
    /// Extensions are appended rather than substituted, so a basename such
    /// as `iasp91.P` maps to `iasp91.P.hdr` / `iasp91.P.buf`.
    pub fn from_basename<P: AsRef<Path>>(basename: P) -> Self {
        let basename = basename.as_ref().to_path_buf();
        let header_path = with_suffix(&basename, HEADER_EXTENSION);
        let buffer_path = with_suffix(&basename, BUFFER_EXTENSION);
        Self {
            basename,
            header_path,
            buffer_path,
        }
    }

    /// Shared basename
    pub fn basename(&self) -> &Path {
        &self.basename
    }

    /// Path of the `.hdr` file
    pub fn header_path(&self) -> &Path {
        &self.header_path
    }

    /// Path of the `.buf` file
    pub fn buffer_path(&self) -> &Path {
        &self.buffer_path
    }

    /// True when both files are present.
    ///
    /// Presence alone does not make a pair trustworthy; use the reader or
    /// validator to check consistency.
    pub fn exists(&self) -> bool {
        self.header_path.is_file() && self.buffer_path.is_file()
    }
}

impl fmt::Display for GridFilePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{{{},{}}}", self.basename.display(), HEADER_EXTENSION, BUFFER_EXTENSION)
    }
}

fn with_suffix(basename: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(basename.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
