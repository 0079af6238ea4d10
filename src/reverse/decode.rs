//! Strict line decoding and encoding selection.

use encoding_rs::Encoding;

use super::error::{Result, ReverseReadError};

/// Resolve an encoding label (e.g. "utf-8", "gbk", "latin1") to an encoding.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ReverseReadError::UnknownEncoding(label.to_string()))
}

/// Minimum viable `buffer_capacity` for an encoding.
///
/// A chunk must be able to hold at least one maximal encoded codepoint:
/// 4 bytes for variable-width multi-byte encodings, 1 for single-byte ones.
pub fn min_buffer_capacity(encoding: &'static Encoding) -> usize {
    if encoding.is_single_byte() {
        1
    } else {
        4
    }
}

/// Decodes completed line fragments under one fixed encoding.
#[derive(Debug)]
pub struct LineDecoder {
    encoding: &'static Encoding,
    buffer_capacity: usize,
}

impl LineDecoder {
    pub fn new(encoding: &'static Encoding, buffer_capacity: usize) -> Self {
        Self {
            encoding,
            buffer_capacity,
        }
    }

    /// Decode one line's bytes, appending the `\n` terminator.
    ///
    /// `more_remaining` is whether unread bytes are left in the file. A
    /// failure is then classified as a possible chunk-boundary artifact
    /// ([`ReverseReadError::BufferTooSmall`]); with nothing left that could
    /// complete the sequence it is terminal
    /// ([`ReverseReadError::MalformedEncoding`]).
    pub fn decode_line(&self, bytes: &[u8], more_remaining: bool) -> Result<String> {
        match self
            .encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
        {
            Some(text) => {
                let mut line = text.into_owned();
                line.push('\n');
                Ok(line)
            }
            None if more_remaining => Err(ReverseReadError::BufferTooSmall {
                capacity: self.buffer_capacity,
            }),
            None => Err(ReverseReadError::MalformedEncoding {
                encoding: self.encoding.name(),
            }),
        }
    }
}
