//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file extension names no supported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding or encoding failed inside the codec.
    #[error("codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// Image does not fit the target buffer.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size.
        expected: String,
        /// Actual size.
        actual: String,
    },

    /// Error from the core types.
    #[error(transparent)]
    Core(#[from] lupton_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
