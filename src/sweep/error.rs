/// Errors that can occur while building a sweep axis
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SweepError {
    /// Bounds or step do not describe a usable range
    #[error("Invalid range {start}:{stop}:{step}: {reason}")]
    InvalidRange {
        /// First sample coordinate
        start: f64,
        /// Inclusive upper bound
        stop: f64,
        /// Sample spacing
        step: f64,
        /// Why the range was rejected
        reason: &'static str,
    },

    /// A `min:max:step` description could not be parsed
    #[error("Invalid sweep description '{0}': expected min:max:step")]
    InvalidDescription(String),
}
