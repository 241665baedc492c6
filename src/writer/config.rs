/// Configuration for the grid writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Call `fsync` on both files before they are renamed into place.
    /// Slower, but a committed pair survives a power loss.
    pub sync_to_disk: bool,

    /// Create missing parent directories of the basename
    pub create_dirs: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            sync_to_disk: false,
            create_dirs: true,
        }
    }
}

impl WriterConfig {
    /// Configuration that fsyncs every file before committing it
    pub fn durable() -> Self {
        Self {
            sync_to_disk: true,
            ..Self::default()
        }
    }
}
