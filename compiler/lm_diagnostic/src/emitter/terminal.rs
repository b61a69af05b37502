//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use lm_lexer_core::SourceBuffer;

use crate::span_utils::{line_at, marker_line};
use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const MARKER: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Output per diagnostic:
///
/// ```text
/// <file>:<line>:<column>: <message>
/// <source line>
/// <marker>
/// ```
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Recover the writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl TerminalEmitter<io::Stdout> {
    /// Create a terminal emitter for stdout with explicit color mode.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, source: &SourceBuffer, diagnostic: &Diagnostic) {
        let pos = diagnostic.pos;

        // Header: file:line:column: message
        let location = format!("{}:{}:{}:", source.name(), pos.line, pos.column);
        self.write_colored(&location, colors::BOLD);
        let _ = writeln!(self.writer, " {}", diagnostic.message);

        // Offending line, written as raw bytes
        let line = line_at(source.as_bytes(), pos.offset);
        let _ = self.writer.write_all(line);
        let _ = writeln!(self.writer);

        let marker = marker_line(line, pos.column);
        if self.colors {
            let _ = write!(self.writer, "{}", colors::MARKER);
            let _ = self.writer.write_all(&marker);
            let _ = write!(self.writer, "{}", colors::RESET);
        } else {
            let _ = self.writer.write_all(&marker);
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }

        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(
                self.writer,
                ": aborting due to {error_count} previous errors"
            );
        }
    }
}
