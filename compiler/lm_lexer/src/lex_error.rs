//! Lexical error kinds.
//!
//! Every lexical error is recovered: the tokenizer reports it and keeps
//! going.

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// No closing `"` before the end of the line or file.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// No closing `'` after the one character byte.
    #[error("unterminated char literal")]
    UnterminatedChar,
    /// Byte that cannot start any token.
    #[error("unknown token '{}'", .byte.escape_ascii())]
    UnknownByte { byte: u8 },
}
