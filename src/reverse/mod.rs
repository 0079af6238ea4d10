//! Reading the logical lines of a file in reverse order with bounded memory.
//!
//! The file is walked from its end toward its start in chunks of at most
//! `buffer_capacity` bytes. Line fragments that straddle a chunk boundary
//! are stitched back together through a single carried fragment, decoded
//! strictly under the configured encoding, and yielded last line first with
//! a `\n` terminator appended to every line.
//!
//! # Example
//! ```no_run
//! # fn main() -> revlines::Result<()> {
//! for line in revlines::open_reverse("app.log", None, None)? {
//!     print!("{}", line?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;

mod assemble;
mod chunks;
mod decode;
mod iter;
mod source;

use std::path::Path;

use chunks::ChunkReader;
use decode::LineDecoder;
use source::ByteSource;

pub use error::{Result, ReverseReadError};
pub use iter::ReverseLines;

/// Chunk size in bytes used when the caller does not pick one.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8192;

/// Open `path` for reverse line reading.
///
/// # Arguments
/// * `path` - File to read; must exist and be readable.
/// * `buffer_capacity` - Chunk size in bytes; defaults to
///   [`DEFAULT_BUFFER_CAPACITY`]. Must be at least 4 for multi-byte
///   encodings and 1 for single-byte encodings.
/// * `encoding` - Text encoding label; defaults to `"utf-8"`.
///
/// # Errors
/// Fails with [`ReverseReadError::UnknownEncoding`] for an unrecognized
/// label and [`ReverseReadError::Configuration`] for an undersized
/// `buffer_capacity`, both before the file is touched; with
/// [`ReverseReadError::NotFound`] or [`ReverseReadError::Io`] when the file
/// cannot be opened.
pub fn open_reverse(
    path: impl AsRef<Path>,
    buffer_capacity: Option<usize>,
    encoding: Option<&str>,
) -> Result<ReverseLines> {
    let encoding = decode::resolve_encoding(encoding.unwrap_or("utf-8"))?;
    let capacity = buffer_capacity.unwrap_or(DEFAULT_BUFFER_CAPACITY);

    let minimum = decode::min_buffer_capacity(encoding);
    if capacity < minimum {
        return Err(ReverseReadError::Configuration {
            encoding: encoding.name(),
            minimum,
            requested: capacity,
        });
    }

    let source = ByteSource::open(path)?;
    Ok(ReverseLines::from_parts(
        ChunkReader::new(source, capacity),
        LineDecoder::new(encoding, capacity),
    ))
}
