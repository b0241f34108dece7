//! Error types for UUID conversion

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for extraction and normalization
///
/// None of these are fatal: batch conversion skips invalid candidates,
/// and a failed whole-input byte literal falls back to regex scanning.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid candidate: {0:?}")]
    InvalidCandidate(String),

    #[error("Invalid byte literal: {0}")]
    ByteLiteral(String),

    #[error("Wrong byte count: expected 16, got {0}")]
    WrongByteCount(usize),

    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),
}
