//! Lm lexer core: owned source text and a bounds-safe byte cursor.
//!
//! A [`SourceBuffer`] holds one file's bytes followed by zeroed padding,
//! so a [`Cursor`] can look a few bytes past the end without checks in
//! the scanner. End of input is decided by position, never by the byte
//! value, which keeps interior NUL bytes distinguishable from EOF.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::{SourceBuffer, SourceError};
