//! Lexer for Lm.
//!
//! Turns a [`SourceBuffer`] into a sequence of [`Token`]s:
//! - keywords and punctuation carry no payload
//! - identifiers carry a [`Symbol`](lm_ir::Symbol) from the shared pool
//! - literals carry their source text verbatim (no escape processing)
//!
//! Ill-formed input is reported through a [`DiagnosticEmitter`] and
//! scanning continues. Use [`Tokenizer`] to pull tokens one at a time,
//! or [`lex`] to scan a whole file.

mod keywords;
mod lex_error;
mod tokenizer;

use lm_diagnostic::DiagnosticEmitter;
use lm_ir::{SymbolPool, Token};
use lm_lexer_core::SourceBuffer;

pub use lex_error::LexErrorKind;
pub use tokenizer::Tokenizer;

/// Result of lexing one file.
#[derive(Clone, Debug)]
pub struct LexOutput {
    /// Every token, ending with `Eof`.
    pub tokens: Vec<Token>,
    /// Diagnostics reported while scanning.
    pub error_count: usize,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Lex a whole buffer.
///
/// Identifiers are interned into `pool`; diagnostics go to `emitter`.
pub fn lex<E: DiagnosticEmitter>(source: &SourceBuffer, pool: &SymbolPool, emitter: E) -> LexOutput {
    let _span = tracing::debug_span!("lex", file = source.name(), bytes = source.len()).entered();

    let mut tokenizer = Tokenizer::new(source, pool, emitter);
    let tokens = tokenizer.tokenize_all();
    let error_count = tokenizer.error_count();

    tracing::debug!(tokens = tokens.len(), errors = error_count, "lexed file");
    LexOutput {
        tokens,
        error_count,
    }
}
