//! Error types for CSS cipher operations.

use thiserror::Error;

/// Errors that can occur during CSS cipher operations.
#[derive(Error, Debug)]
pub enum CssError {
    /// Authentication variant index out of range.
    #[error("invalid variant index: {0} (must be below 32)")]
    InvalidVariant(u32),

    /// Invalid player key file format.
    #[error("invalid player key file: {0}")]
    InvalidKeyFile(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
