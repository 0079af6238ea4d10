//! Backward chunk traversal of the byte source.

use log::trace;

use super::error::Result;
use super::source::ByteSource;

/// Walks the byte source from its end toward its start in chunks of at most
/// `capacity` bytes, never re-reading a byte and never reading past offset 0.
#[derive(Debug)]
pub struct ChunkReader {
    source: ByteSource,
    capacity: usize,
    consumed: u64,
}

impl ChunkReader {
    pub fn new(source: ByteSource, capacity: usize) -> Self {
        Self {
            source,
            capacity,
            consumed: 0,
        }
    }

    /// Bytes of the file not yet consumed from the tail.
    pub fn remaining(&self) -> u64 {
        self.source.size() - self.consumed
    }

    /// Read the next chunk, or `None` once the whole file has been consumed.
    ///
    /// The first chunk is the one touching true end-of-file; if its last byte
    /// is the newline delimiter, exactly that byte is dropped so a trailing
    /// `\n` does not manifest as a spurious empty final line. The dropped
    /// byte still counts as consumed, and a file holding only `"\n"` yields
    /// one empty chunk here (its single empty logical line).
    pub fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        let remaining = self.remaining();
        if remaining == 0 {
            return Ok(None);
        }

        let length = remaining.min(self.capacity as u64) as usize;
        let end_offset = self.source.size() - self.consumed;
        let mut chunk = self.source.read_back(end_offset, length)?;

        let touches_eof = self.consumed == 0;
        self.consumed += length as u64;

        if touches_eof && chunk.last() == Some(&b'\n') {
            chunk.pop();
        }

        trace!(
            "Read chunk of {} bytes ending at offset {} ({} bytes remain)",
            length,
            end_offset,
            self.remaining()
        );
        Ok(Some(chunk))
    }
}
