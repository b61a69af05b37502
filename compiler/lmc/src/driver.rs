//! Lexing driver: load every file, lex it, print results in input order.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use lm_diagnostic::{DiagnosticEmitter, DiagnosticQueue, TerminalEmitter};
use lm_ir::{Payload, SharedSymbolPool, SymbolPool, Token};
use lm_lexer::{lex, LexOutput};
use lm_lexer_core::{SourceBuffer, SourceError};
use rayon::prelude::*;

use crate::options::Options;

/// Totals across every file in one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub tokens: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Result of lexing one file, before anything is printed.
struct FileResult {
    output: LexOutput,
    diagnostics: DiagnosticQueue,
    elapsed: Duration,
}

/// Read every input file.
///
/// Stops at the first file that cannot be read; nothing is lexed then.
pub fn load_sources(files: &[PathBuf]) -> Result<Vec<SourceBuffer>, SourceError> {
    files
        .iter()
        .map(|path| SourceBuffer::from_file(path))
        .collect()
}

/// Lex every file named in `options` and write diagnostics, token dumps,
/// and benchmark lines to `out`.
///
/// `is_tty` only matters for `ColorMode::Auto`.
pub fn run<W: Write>(options: &Options, mut out: W, is_tty: bool) -> Result<RunSummary, SourceError> {
    let sources = load_sources(&options.files)?;
    let pool = SharedSymbolPool::new();

    let results = if options.parallel && sources.len() > 1 {
        lex_parallel(&sources, &pool)
    } else {
        sources.iter().map(|source| lex_one(source, &pool)).collect()
    };

    // Every file is lexed; later phases only resolve.
    pool.release_lookup_index();

    let mut summary = RunSummary::default();
    for (source, result) in sources.iter().zip(&results) {
        {
            let mut emitter = TerminalEmitter::with_color_mode(&mut out, options.color, is_tty);
            result.diagnostics.replay(source, &mut emitter);
            emitter.flush();
        }
        if options.dump_tokens {
            write_tokens(&mut out, source, &result.output.tokens, &pool);
        }
        if options.benchmark {
            write_benchmark(&mut out, source, result.elapsed);
        }

        summary.files += 1;
        summary.tokens += result.output.tokens.len();
        summary.errors += result.output.error_count;
    }

    let mut emitter = TerminalEmitter::with_color_mode(&mut out, options.color, is_tty);
    emitter.emit_summary(summary.errors);
    emitter.flush();

    tracing::debug!(
        files = summary.files,
        tokens = summary.tokens,
        errors = summary.errors,
        symbols = pool.len(),
        "lexing finished"
    );
    Ok(summary)
}

fn lex_one(source: &SourceBuffer, pool: &SymbolPool) -> FileResult {
    let mut diagnostics = DiagnosticQueue::new();
    let start = Instant::now();
    let output = lex(source, pool, &mut diagnostics);
    FileResult {
        output,
        diagnostics,
        elapsed: start.elapsed(),
    }
}

/// Lex files on a scoped rayon pool sharing one symbol pool.
///
/// Uses `build_scoped` so the pool is torn down before returning.
fn lex_parallel(sources: &[SourceBuffer], pool: &SharedSymbolPool) -> Vec<FileResult> {
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |thread_pool| {
            thread_pool.install(|| {
                sources
                    .par_iter()
                    .map(|source| lex_one(source, pool))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), lexing sequentially");
            sources.iter().map(|source| lex_one(source, pool)).collect()
        })
}

fn write_tokens<W: Write>(out: &mut W, source: &SourceBuffer, tokens: &[Token], pool: &SymbolPool) {
    let _ = writeln!(out, "Tokens for '{}' ({} tokens):", source.name(), tokens.len());
    for tok in tokens {
        let _ = match tok.payload() {
            Payload::None => writeln!(out, "  {:?} @ {}", tok.kind(), tok.pos()),
            Payload::Literal(lit) => {
                writeln!(out, "  {:?}({:?}) @ {}", tok.kind(), lit.to_string(), tok.pos())
            }
            Payload::Symbol(sym) => {
                writeln!(out, "  {:?}({}) @ {}", tok.kind(), pool.resolve(*sym), tok.pos())
            }
        };
    }
}

/// Bytes per second in MiB/s.
fn throughput_mib(bytes: u32, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64().max(1e-9);
    f64::from(bytes) / secs / (1024.0 * 1024.0)
}

fn write_benchmark<W: Write>(out: &mut W, source: &SourceBuffer, elapsed: Duration) {
    let _ = writeln!(
        out,
        "info: {}: {:?} - {:.2} MiB/s",
        source.name(),
        elapsed,
        throughput_mib(source.len(), elapsed)
    );
}

#[cfg(test)]
mod tests;
