//! Diagnostic reporting for the Lm compiler.
//!
//! A diagnostic is a position plus a message. Rendering re-reads the
//! offending line from the raw source bytes and draws a marker under the
//! reported column:
//!
//! ```text
//! main.lm:3:9: unterminated string literal
//! let s = "abc
//!         ^
//! ```
//!
//! Tabs before the column are copied into the marker line, so the marker
//! lines up however the terminal renders tabs.

mod diagnostic;
pub mod emitter;
pub mod queue;
mod reporter;
pub mod span_utils;

pub use diagnostic::Diagnostic;
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use queue::DiagnosticQueue;
pub use reporter::DiagnosticReporter;
