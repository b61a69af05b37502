//! Zero-padded source buffer.
//!
//! # Layout
//!
//! ```text
//! [source_bytes..., 0x00, padding_zeros...]
//!  ^                ^     ^
//!  0                |     rounded up to 64-byte boundary
//!              source_len
//! ```

use std::io;
use std::path::Path;

use crate::Cursor;

/// Cache line size in bytes, used for buffer padding.
const CACHE_LINE: usize = 64;

/// Minimum zero bytes after the source: one sentinel plus lookahead.
const MIN_PADDING: usize = 4;

/// Why a source file could not be turned into a buffer.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot find file '{name}'")]
    NotFound { name: String },
    #[error("permission denied reading '{name}'")]
    PermissionDenied { name: String },
    #[error("'{name}' is too large: {len} bytes, max is {max}", max = u32::MAX)]
    TooLarge { name: String, len: usize },
    #[error("cannot read '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// One file's full text plus its display name.
///
/// Must outlive every cursor and diagnostic built from it.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    name: String,
    /// Owned buffer: `[source_bytes..., 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Take ownership of `bytes` and append the zero padding.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, SourceError> {
        let name = name.into();
        let len = bytes.len();
        let Ok(source_len) = u32::try_from(len) else {
            return Err(SourceError::TooLarge { name, len });
        };

        let padded_len = (len + MIN_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = bytes;
        buf.resize(padded_len, 0);

        Ok(SourceBuffer {
            name,
            buf,
            source_len,
        })
    }

    /// Buffer over in-memory text.
    ///
    /// # Panics
    /// Panics if `text` is longer than `u32::MAX` bytes.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Self::from_bytes(name, text.as_bytes().to_vec()).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Read a whole file. The display name is the path as given.
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let name = path.display().to_string();
        match std::fs::read(path) {
            Ok(bytes) => Self::from_bytes(name, bytes),
            Err(e) => Err(match e.kind() {
                io::ErrorKind::NotFound => SourceError::NotFound { name },
                io::ErrorKind::PermissionDenied => SourceError::PermissionDenied { name },
                _ => SourceError::Io { name, source: e },
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source bytes (without padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
