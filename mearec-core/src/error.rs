//! Error types for mearec-core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Peak-train value and sample sequences differ in length.
    #[error("peak train length mismatch: {values} values vs {samples} samples")]
    LengthMismatch { values: usize, samples: usize },
}
