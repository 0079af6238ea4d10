//! # revlines
//!
//! Reads the logical lines of a file in reverse order (last line first)
//! using bounded memory, without loading the whole file. Stays correct when
//! a multi-byte codepoint is split across chunk read boundaries, and tells
//! "read with a bigger buffer" failures apart from genuinely malformed text.
pub mod reverse;

// Re-export the main types for convenience
pub use reverse::{
    open_reverse, Result, ReverseLines, ReverseReadError, DEFAULT_BUFFER_CAPACITY,
};
