//! Interned identifier handle.
//!
//! A `Symbol` is a dense 32-bit index into a [`SymbolPool`](crate::SymbolPool).

use std::fmt;

/// Interned string identifier.
///
/// Two symbols produced by the same pool are equal exactly when their
/// text is byte-for-byte equal. Ids are dense and start at 0.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Symbol(u32);

crate::static_assert_size!(Symbol, 4);

impl Symbol {
    /// Create from a raw id, for tests and ids read back from storage.
    ///
    /// The pool is the only source of meaningful ids; resolving a symbol
    /// built here panics unless the pool actually issued that id.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Symbol(raw)
    }

    /// Position of this symbol's text in the pool's string array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}
