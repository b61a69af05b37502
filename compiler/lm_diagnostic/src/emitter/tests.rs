use lm_ir::SourcePos;
use pretty_assertions::assert_eq;

use super::*;

fn render(source: &SourceBuffer, diag: &Diagnostic, mode: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit(source, diag);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

// === ColorMode ===

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

// === Plain rendering ===

#[test]
fn renders_header_line_and_marker() {
    let source = SourceBuffer::new("main.lm", "let a = 1\nlet s = \"abc\nret s");
    let diag = Diagnostic::new(SourcePos::new(2, 9, 18), "unterminated string literal");
    assert_eq!(
        render(&source, &diag, ColorMode::Never),
        "main.lm:2:9: unterminated string literal\nlet s = \"abc\n        ^\n"
    );
}

#[test]
fn marker_follows_tabs() {
    let source = SourceBuffer::new("t.lm", "fn f\n\tx = ?\n");
    let diag = Diagnostic::new(SourcePos::new(2, 6, 10), "unknown token '?'");
    assert_eq!(
        render(&source, &diag, ColorMode::Never),
        "t.lm:2:6: unknown token '?'\n\tx = ?\n\t    ^\n"
    );
}

#[test]
fn raw_line_bytes_are_preserved() {
    let source = SourceBuffer::from_bytes("b.lm", vec![b'x', 0xFF, b'\n']);
    let source = match source {
        Ok(s) => s,
        Err(e) => panic!("{e}"),
    };
    let diag = Diagnostic::new(SourcePos::new(1, 2, 1), "unknown token '\\xff'");
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit(&source, &diag);
    let out = emitter.into_inner();
    assert!(out.windows(3).any(|w| w == [b'x', 0xFF, b'\n']));
}

#[test]
fn colored_output_wraps_location_and_marker() {
    let source = SourceBuffer::new("c.lm", "@@ `");
    let diag = Diagnostic::new(SourcePos::new(1, 4, 3), "unknown token '`'");
    assert_eq!(
        render(&source, &diag, ColorMode::Always),
        "\x1b[1mc.lm:1:4:\x1b[0m unknown token '`'\n@@ `\n\x1b[1;32m   ^\x1b[0m\n"
    );
}

// === Summary ===

#[test]
fn summary_wording() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(0);
    emitter.emit_summary(1);
    emitter.emit_summary(3);
    let out = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert_eq!(
        out,
        "error: aborting due to previous error\nerror: aborting due to 3 previous errors\n"
    );
}

#[test]
fn mut_ref_forwards() {
    let source = SourceBuffer::new("r.lm", "?");
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    {
        let mut by_ref = &mut emitter;
        by_ref.emit(&source, &Diagnostic::new(SourcePos::START, "m"));
        DiagnosticEmitter::flush(&mut by_ref);
    }
    let out = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert_eq!(out, "r.lm:1:1: m\n?\n^\n");
}
