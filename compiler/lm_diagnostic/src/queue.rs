//! In-memory diagnostic collection.
//!
//! Used when output order must not follow emission order, e.g. files
//! lexed in parallel whose diagnostics are printed in input order.

use lm_lexer_core::SourceBuffer;

use crate::{Diagnostic, DiagnosticEmitter};

/// Emitter that keeps diagnostics instead of writing them.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics in the order they were reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Send every queued diagnostic to `emitter`, in order.
    pub fn replay<E: DiagnosticEmitter + ?Sized>(&self, source: &SourceBuffer, emitter: &mut E) {
        emitter.emit_all(source, &self.diagnostics);
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticEmitter for DiagnosticQueue {
    fn emit(&mut self, _source: &SourceBuffer, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }

    fn flush(&mut self) {}

    fn emit_summary(&mut self, _error_count: usize) {}
}
