//! Pack extraction error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating and extracting a pack payload.
#[derive(Debug, Error)]
pub enum PackError {
    /// The input file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// No pack signature anywhere in the buffer. The prefix dump helps
    /// diagnose what the capture actually contains.
    #[error("no PACK data found: file is {file_size} bytes, first bytes (hex): {prefix_hex}")]
    SignatureMissing { file_size: usize, prefix_hex: String },

    /// A signature was found but fewer than the 12 header bytes remain.
    #[error("PACK data too short: {len} bytes from signature, need at least 12")]
    TooShort { len: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
