//! Lexer output: tokens and their payloads.

mod kind;

use std::fmt;

use crate::{SourcePos, Symbol};

pub use kind::{PayloadClass, TokenKind};

/// Literal text exactly as it appeared between its delimiters.
///
/// Stored as bytes because source files are not required to be UTF-8.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Literal(Box<[u8]>);

impl Literal {
    pub fn new(bytes: &[u8]) -> Self {
        Literal(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// Data attached to a token. The variant always matches
/// [`TokenKind::payload_class`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Payload {
    None,
    Literal(Literal),
    Symbol(Symbol),
}

/// A classified, positioned unit of source text.
///
/// Built only through the constructors below, which keep the payload
/// consistent with the kind.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    kind: TokenKind,
    payload: Payload,
    pos: SourcePos,
    /// Source bytes covered. Zero for `Eof`.
    len: u32,
}

impl Token {
    /// A token without payload (keyword, punctuation, `Unknown`).
    ///
    /// # Panics
    /// Panics if `kind` carries a payload.
    pub fn simple(kind: TokenKind, pos: SourcePos, len: u32) -> Self {
        assert_eq!(
            kind.payload_class(),
            PayloadClass::None,
            "{kind:?} requires a payload"
        );
        Token {
            kind,
            payload: Payload::None,
            pos,
            len,
        }
    }

    /// # Panics
    /// Panics if `kind` is not a literal kind.
    pub fn literal(kind: TokenKind, text: &[u8], pos: SourcePos, len: u32) -> Self {
        assert!(kind.is_literal(), "{kind:?} is not a literal kind");
        Token {
            kind,
            payload: Payload::Literal(Literal::new(text)),
            pos,
            len,
        }
    }

    pub fn ident(sym: Symbol, pos: SourcePos, len: u32) -> Self {
        Token {
            kind: TokenKind::Ident,
            payload: Payload::Symbol(sym),
            pos,
            len,
        }
    }

    pub fn eof(pos: SourcePos) -> Self {
        Token {
            kind: TokenKind::Eof,
            payload: Payload::None,
            pos,
            len: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[inline]
    pub fn pos(&self) -> SourcePos {
        self.pos
    }

    /// Number of source bytes this token covers.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte offset one past the last byte of the token.
    #[inline]
    pub fn end_offset(&self) -> u32 {
        self.pos.offset + self.len
    }

    pub fn literal_text(&self) -> Option<&Literal> {
        match &self.payload {
            Payload::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self.payload {
            Payload::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests;
