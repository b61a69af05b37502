//! Diagnostic Emitters
//!
//! An emitter decides where rendered diagnostics go:
//! - Terminal: human-readable output, optionally colored
//! - Queue: kept in memory and replayed later (see [`crate::queue`])

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use lm_lexer_core::SourceBuffer;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
///
/// `source` is the buffer the diagnostic's position refers to; emitters
/// re-read the offending line from it.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, source: &SourceBuffer, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, source: &SourceBuffer, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(source, diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a closing summary once every file has been processed.
    fn emit_summary(&mut self, error_count: usize);
}

impl<E: DiagnosticEmitter + ?Sized> DiagnosticEmitter for &mut E {
    fn emit(&mut self, source: &SourceBuffer, diagnostic: &Diagnostic) {
        (**self).emit(source, diagnostic);
    }

    fn flush(&mut self) {
        (**self).flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        (**self).emit_summary(error_count);
    }
}

#[cfg(test)]
mod tests;
