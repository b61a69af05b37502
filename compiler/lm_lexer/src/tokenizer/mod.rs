//! Pull-based tokenizer.
//!
//! One call to [`Tokenizer::next_token`] skips whitespace and `#` line
//! comments, then scans exactly one token. Line and column advance as
//! bytes are consumed; they are never recomputed from the start.
//!
//! Lexical errors are reported through the [`DiagnosticReporter`] and the
//! scan continues, so one pass surfaces every error in the file.

mod operators;

use std::borrow::Cow;

use lm_diagnostic::{DiagnosticEmitter, DiagnosticReporter};
use lm_ir::{SourcePos, SymbolPool, Token, TokenKind};
use lm_lexer_core::{Cursor, SourceBuffer};

use crate::keywords;
use crate::lex_error::LexErrorKind;

use operators::match_operator;

/// Whitespace skipped between tokens, other than `\n`.
#[inline]
fn is_inline_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scanner over one source buffer.
///
/// Identifiers are interned into the borrowed pool. Diagnostics go to
/// the emitter `E`; pass `&mut emitter` to keep ownership of it.
pub struct Tokenizer<'a, E: DiagnosticEmitter> {
    cursor: Cursor<'a>,
    /// Position of the cursor. `pos.offset == cursor.pos()` between calls.
    pos: SourcePos,
    pool: &'a SymbolPool,
    reporter: DiagnosticReporter<'a, E>,
}

impl<'a, E: DiagnosticEmitter> Tokenizer<'a, E> {
    pub fn new(source: &'a SourceBuffer, pool: &'a SymbolPool, emitter: E) -> Self {
        Tokenizer {
            cursor: source.cursor(),
            pos: SourcePos::START,
            pool,
            reporter: DiagnosticReporter::new(source, emitter),
        }
    }

    /// Scan the next token.
    ///
    /// At end of input this returns `Eof` at the final position, and keeps
    /// doing so on every later call.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.pos;
        if self.cursor.is_eof() {
            return Token::eof(start);
        }

        match self.cursor.current() {
            b'0'..=b'9' => self.number(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.ident_or_keyword(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),
            b => {
                let c = &self.cursor;
                match match_operator(b, c.peek(1), c.peek(2)) {
                    Some((kind, len)) => {
                        self.cursor.advance_n(len);
                        let len = self.sync(start);
                        Token::simple(kind, start, len)
                    }
                    None => self.unknown(start, b),
                }
            }
        }
    }

    /// Scan the whole buffer, up to and including the first `Eof`.
    pub fn tokenize_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.cursor.source_len() as usize / 4 + 1);
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Number of lexical errors reported so far.
    pub fn error_count(&self) -> usize {
        self.reporter.error_count()
    }

    /// Current scan position.
    pub fn position(&self) -> SourcePos {
        self.pos
    }

    pub fn emitter(&self) -> &E {
        self.reporter.emitter()
    }

    pub fn into_emitter(self) -> E {
        self.reporter.into_emitter()
    }

    /// Bring `pos` up to the cursor after consuming bytes on one line.
    ///
    /// Returns the length of the token that started at `start`.
    #[inline]
    fn sync(&mut self, start: SourcePos) -> u32 {
        let consumed = self.cursor.pos() - self.pos.offset;
        self.pos.column += consumed;
        self.pos.offset = self.cursor.pos();
        self.pos.offset - start.offset
    }

    fn report(&mut self, pos: SourcePos, kind: LexErrorKind) {
        self.reporter.report(pos, kind.to_string());
    }

    /// Skip whitespace and `#` comments, in any order.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b'\n' => {
                    self.cursor.advance();
                    self.pos = self.pos.advanced_over(b'\n');
                }
                b if is_inline_whitespace(b) => {
                    self.cursor.eat_while(is_inline_whitespace);
                    self.sync(self.pos);
                }
                b'#' => {
                    self.cursor.eat_until_newline_or_eof();
                    self.sync(self.pos);
                }
                _ => return,
            }
        }
    }

    fn number(&mut self, start: SourcePos) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // `1.` and `1.x` stay integers; `.` needs a digit on both sides.
        let kind = if self.cursor.current() == b'.' && self.cursor.peek(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            TokenKind::Float64Literal
        } else {
            TokenKind::Int32Literal
        };

        let len = self.sync(start);
        let text = self.cursor.slice_from(start.offset);
        Token::literal(kind, text, start, len)
    }

    fn ident_or_keyword(&mut self, start: SourcePos) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let len = self.sync(start);

        // ASCII only, so this borrows without copying.
        let text: Cow<'_, str> = String::from_utf8_lossy(self.cursor.slice_from(start.offset));
        match keywords::lookup(&text) {
            Some(kind) => Token::simple(kind, start, len),
            None => Token::ident(self.pool.intern(&text), start, len),
        }
    }

    fn string(&mut self, start: SourcePos) -> Token {
        self.cursor.advance();
        let content_start = self.cursor.pos();
        let closer = self.cursor.eat_until_delim_or_newline(b'"');
        let content = self.cursor.slice_from(content_start);

        if closer == Some(b'"') {
            self.cursor.advance();
        } else {
            self.report(start, LexErrorKind::UnterminatedString);
        }

        let len = self.sync(start);
        Token::literal(TokenKind::StringLiteral, content, start, len)
    }

    fn char_literal(&mut self, start: SourcePos) -> Token {
        self.cursor.advance();
        let content_start = self.cursor.pos();

        // One byte of content, never a line break.
        if !self.cursor.is_eof() && self.cursor.current() != b'\n' {
            self.cursor.advance();
        }
        let content = self.cursor.slice_from(content_start);

        if !self.cursor.is_eof() && self.cursor.current() == b'\'' {
            self.cursor.advance();
        } else {
            self.report(start, LexErrorKind::UnterminatedChar);
        }

        let len = self.sync(start);
        Token::literal(TokenKind::CharLiteral, content, start, len)
    }

    fn unknown(&mut self, start: SourcePos, byte: u8) -> Token {
        self.report(start, LexErrorKind::UnknownByte { byte });
        self.cursor.advance();
        let len = self.sync(start);
        Token::simple(TokenKind::Unknown, start, len)
    }
}
