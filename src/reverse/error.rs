//! Custom error types for the revlines crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum ReverseReadError {
    /// The file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O fault while opening or reading the file.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `buffer_capacity` is below the minimum viable chunk size for the
    /// selected encoding.
    #[error("buffer_capacity must be at least {minimum} for {encoding}, got {requested}")]
    Configuration {
        encoding: &'static str,
        minimum: usize,
        requested: usize,
    },

    /// The encoding label was not recognized.
    #[error("Unknown encoding label: {0:?}")]
    UnknownEncoding(String),

    /// A line failed to decode while unread bytes remain in the file, so the
    /// failure may be a multi-byte codepoint sliced by a chunk boundary.
    /// Re-reading with a larger `buffer_capacity` can succeed.
    #[error("Decoding failed near a chunk boundary. Try increasing buffer_capacity (current: {capacity})")]
    BufferTooSmall { capacity: usize },

    /// A line failed to decode with nothing left in the file that could
    /// complete it. The data is genuinely invalid under this encoding.
    #[error("Invalid {encoding} byte sequence in line data")]
    MalformedEncoding { encoding: &'static str },
}

impl ReverseReadError {
    /// Whether retrying the whole read with a larger `buffer_capacity` can
    /// succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ReverseReadError::BufferTooSmall { .. })
    }
}

/// A convenience `Result` type alias using the crate's `ReverseReadError` type.
pub type Result<T> = std::result::Result<T, ReverseReadError>;
