//! Source positions.

use std::fmt;

/// A location in one source buffer.
///
/// `line` and `column` are 1-based and count bytes, so a tab is one
/// column. `offset` is the 0-based index of the first byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

crate::static_assert_size!(SourcePos, 12);

impl SourcePos {
    /// Position of the first byte of any buffer.
    pub const START: SourcePos = SourcePos {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        SourcePos {
            line,
            column,
            offset,
        }
    }

    /// Step over one byte.
    ///
    /// A line feed moves to column 1 of the next line; every other byte
    /// moves one column right.
    #[inline]
    #[must_use]
    pub const fn advanced_over(self, byte: u8) -> Self {
        if byte == b'\n' {
            SourcePos {
                line: self.line + 1,
                column: 1,
                offset: self.offset + 1,
            }
        } else {
            SourcePos {
                line: self.line,
                column: self.column + 1,
                offset: self.offset + 1,
            }
        }
    }
}

impl Default for SourcePos {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
