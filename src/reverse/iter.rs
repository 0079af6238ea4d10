//! The pull-based reverse line iterator.

use std::collections::VecDeque;

use super::assemble::LineAssembler;
use super::chunks::ChunkReader;
use super::decode::LineDecoder;
use super::error::Result;

/// Lazy sequence of a file's decoded logical lines, last line first.
///
/// Each pull advances the backward chunk walk at most once; a chunk may
/// complete several lines, which are buffered and drained one per pull. The
/// underlying file handle is released as soon as the walk completes or an
/// error is about to surface, and by `Drop` when the caller abandons the
/// iterator mid-stream.
///
/// Created by [`open_reverse`](crate::open_reverse).
#[derive(Debug)]
pub struct ReverseLines {
    chunks: Option<ChunkReader>,
    assembler: LineAssembler,
    decoder: LineDecoder,
    pending: VecDeque<Vec<u8>>,
    done: bool,
}

impl ReverseLines {
    pub(super) fn from_parts(chunks: ChunkReader, decoder: LineDecoder) -> Self {
        Self {
            chunks: Some(chunks),
            assembler: LineAssembler::new(),
            decoder,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Bytes of the file not yet read. Zero once the source is released.
    fn unread_bytes(&self) -> u64 {
        self.chunks.as_ref().map_or(0, ChunkReader::remaining)
    }

    /// Close the file before the caller observes the error.
    fn fail(&mut self) {
        self.chunks = None;
        self.done = true;
    }
}

impl Iterator for ReverseLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            // Drain lines completed by the last chunk first.
            if let Some(fragment) = self.pending.pop_front() {
                let more_remaining = self.unread_bytes() > 0;
                return match self.decoder.decode_line(&fragment, more_remaining) {
                    Ok(line) => Some(Ok(line)),
                    Err(e) => {
                        self.fail();
                        Some(Err(e))
                    }
                };
            }

            let next_chunk = match self.chunks.as_mut() {
                Some(reader) => reader.next_chunk(),
                None => Ok(None),
            };

            match next_chunk {
                Ok(Some(chunk)) => {
                    self.pending = self.assembler.push_chunk(&chunk);
                }
                Ok(None) => {
                    // Walk complete: close the file, then emit the carry as
                    // the file's first logical line. No carry means the file
                    // was empty.
                    self.chunks = None;
                    self.done = true;
                    let fragment = self.assembler.finish()?;
                    return Some(self.decoder.decode_line(&fragment, false));
                }
                Err(e) => {
                    self.fail();
                    return Some(Err(e));
                }
            }
        }
    }
}
