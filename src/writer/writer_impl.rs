use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use byteorder::{NativeEndian, WriteBytesExt};
use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::format::{encode_header, GridFilePair};
use crate::grid::{GridData, GridModel};

use super::config::WriterConfig;
use super::error::WriterError;

/// Writer for grid file pairs.
///
/// Both files are staged as temporary files next to their destination and
/// only renamed into place once complete. The buffer is committed before the
/// header, and any previous header is removed first, so a basename never
/// carries a header that describes a buffer which was not fully written.
#[derive(Debug, Clone, Default)]
pub struct GridWriter {
    config: WriterConfig,
}

impl GridWriter {
    /// Create a writer with the given configuration
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Writer configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Persist `model` as `<basename>.hdr` + `<basename>.buf`.
    ///
    /// Existing files at the basename are replaced unconditionally.
    pub fn write<P: AsRef<Path>>(
        &self,
        model: &GridModel,
        basename: P,
    ) -> Result<GridFilePair, WriterError> {
        let basename = basename.as_ref();
        let file_name = basename
            .file_name()
            .ok_or_else(|| WriterError::InvalidBasename(basename.display().to_string()))?
            .to_string_lossy()
            .into_owned();

        let dir = match basename.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if self.config.create_dirs {
            fs::create_dir_all(dir)?;
        }

        let pair = GridFilePair::from_basename(basename);
        let prefix = format!(".{}.", file_name);

        // Stage the buffer and confirm its size before touching the header
        let mut buffer_tmp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".buf.tmp")
            .tempfile_in(dir)?;
        {
            let mut writer = BufWriter::new(&mut buffer_tmp);
            write_samples(&mut writer, model.data())?;
            writer.flush()?;
        }

        let expected = model.header().buffer_byte_len() as u64;
        let actual = buffer_tmp.as_file().metadata()?.len();
        if actual != expected {
            return Err(WriterError::IncompleteBuffer { expected, actual });
        }

        let mut header_tmp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".hdr.tmp")
            .tempfile_in(dir)?;
        header_tmp.write_all(encode_header(model.header()).as_bytes())?;
        header_tmp.flush()?;

        if self.config.sync_to_disk {
            buffer_tmp.as_file().sync_all()?;
            header_tmp.as_file().sync_all()?;
        }

        if pair.header_path().exists() {
            warn!("Overwriting existing grid {}", pair);
        }
        remove_if_exists(pair.header_path())?;

        commit(buffer_tmp, pair.buffer_path())?;
        commit(header_tmp, pair.header_path())?;

        debug!(
            "Wrote {} ({} samples, {} bytes)",
            pair,
            model.data().len(),
            expected
        );

        Ok(pair)
    }
}

/// Write `model` with the default configuration
pub fn write_grid<P: AsRef<Path>>(model: &GridModel, basename: P) -> Result<GridFilePair, WriterError> {
    GridWriter::default().write(model, basename)
}

/// Serialize samples in native byte order, no framing
fn write_samples<W: Write>(writer: &mut W, data: &GridData) -> io::Result<()> {
    match data {
        GridData::Single(values) => {
            for &v in values {
                writer.write_f32::<NativeEndian>(v)?;
            }
        }
        GridData::Double(values) => {
            for &v in values {
                writer.write_f64::<NativeEndian>(v)?;
            }
        }
    }
    Ok(())
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

fn commit(staged: NamedTempFile, destination: &Path) -> Result<(), WriterError> {
    staged
        .persist(destination)
        .map(|_| ())
        .map_err(|e| WriterError::Persist {
            path: destination.to_path_buf(),
            source: e.error,
        })
}
