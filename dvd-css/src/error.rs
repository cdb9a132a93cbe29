//! Error types for DVD CSS descrambling.

use thiserror::Error;

/// Result type for DVD CSS operations.
pub type Result<T> = std::result::Result<T, Error>;

/// DVD CSS error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer does not match the required fixed length.
    #[error("invalid buffer size: expected {expected} bytes, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    /// Sector block size smaller than the MPEG-PS header region.
    #[error("invalid block size: {0} (must be at least 128)")]
    InvalidBlockSize(usize),
}
