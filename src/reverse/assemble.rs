//! Splitting chunks into line fragments and stitching across chunk boundaries.

use std::collections::VecDeque;

/// Reassembles logical lines from backward-read chunks.
///
/// At most one fragment is carried between chunks: the first fragment, in
/// file order, of the chunk just processed. It is the prefix of a line whose
/// start lies in a chunk not yet read, and is completed either by the next
/// chunk or by [`finish`](LineAssembler::finish) once no chunks remain.
#[derive(Debug, Default)]
pub struct LineAssembler {
    carry: Option<Vec<u8>>,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self { carry: None }
    }

    /// Split one chunk on the newline delimiter and return the completed
    /// fragments in emit order, nearest file-end first.
    ///
    /// The previous carry continues this chunk's last fragment toward the
    /// file's end, so it is appended there before anything is emitted. The
    /// chunk's first fragment is withheld as the new carry. A chunk without
    /// any delimiter therefore emits nothing and only grows the carry.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> VecDeque<Vec<u8>> {
        let mut fragments: Vec<Vec<u8>> = chunk
            .split(|&byte| byte == b'\n')
            .map(<[u8]>::to_vec)
            .collect();

        if let Some(carry) = self.carry.take() {
            if let Some(last) = fragments.last_mut() {
                last.extend_from_slice(&carry);
            }
        }

        // Splitting any slice yields at least one fragment, so the carry is
        // always repopulated here.
        let mut fragments = fragments.into_iter();
        self.carry = fragments.next();
        fragments.rev().collect()
    }

    /// Take the final carried fragment once the chunk source is exhausted.
    /// It is the file's first logical line; `None` only for an empty file.
    pub fn finish(&mut self) -> Option<Vec<u8>> {
        self.carry.take()
    }
}
