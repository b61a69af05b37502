//! Position-and-message reporting front end.

use lm_ir::SourcePos;
use lm_lexer_core::SourceBuffer;

use crate::{Diagnostic, DiagnosticEmitter};

/// Reports problems found in one source buffer.
///
/// Reporting never fails and never interrupts the caller; output goes to
/// the wrapped emitter.
pub struct DiagnosticReporter<'a, E: DiagnosticEmitter> {
    source: &'a SourceBuffer,
    emitter: E,
    count: usize,
}

impl<'a, E: DiagnosticEmitter> DiagnosticReporter<'a, E> {
    pub fn new(source: &'a SourceBuffer, emitter: E) -> Self {
        DiagnosticReporter {
            source,
            emitter,
            count: 0,
        }
    }

    /// Report `message` at `pos`.
    pub fn report(&mut self, pos: SourcePos, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(pos, message);
        tracing::trace!(
            file = self.source.name(),
            line = pos.line,
            column = pos.column,
            msg = %diagnostic.message,
            "diagnostic"
        );
        self.emitter.emit(self.source, &diagnostic);
        self.count += 1;
    }

    /// Number of diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.count
    }

    pub fn source(&self) -> &'a SourceBuffer {
        self.source
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }
}
