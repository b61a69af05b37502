//! Byte cursor over a zero-padded source buffer.
//!
//! The cursor only knows bytes and positions; line and column tracking
//! belong to the tokenizer. EOF is `pos >= source_len`, so an interior
//! NUL byte reads as `0x00` but is not EOF.

/// Cursor over a zero-padded byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so the scanner can snapshot it freely.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes followed by zero padding.
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "padding must follow the source"
        );
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at or past EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Returns the byte `k` positions ahead of current.
    ///
    /// Reads past the source return `0x00`, whether they land in the
    /// padding or beyond it.
    #[inline]
    pub fn peek(&self, k: u32) -> u8 {
        self.buf
            .get(self.pos as usize + k as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Advance the cursor by one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes in `start..end`.
    ///
    /// `end` is clamped to the source length.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        &self.buf[start..end]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte, never past EOF.
    ///
    /// Returns the number of bytes consumed.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        while !self.is_eof() && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Advance to the next `\n` byte or EOF.
    ///
    /// The newline itself is not consumed. Returns the number of bytes
    /// consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) -> u32 {
        let start = self.pos;
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
        self.pos - start
    }

    /// Advance to the next `delim` or `\n`, whichever comes first.
    ///
    /// Returns the byte found, or `None` at EOF. The cursor stops on the
    /// found byte without consuming it.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_delim_or_newline(&mut self, delim: u8) -> Option<u8> {
        if let Some(offset) = memchr::memchr2(delim, b'\n', self.remaining()) {
            self.pos += offset as u32;
            Some(self.buf[self.pos as usize])
        } else {
            self.pos = self.source_len;
            None
        }
    }
}
