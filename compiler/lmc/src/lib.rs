//! Lm compiler driver.
//!
//! Loads every input file, lexes it against one shared symbol pool, and
//! prints diagnostics in input order.
//!
//! ```text
//! args ──► Options ──► SourceBuffer per file ──► lm_lexer::lex ──► stdout
//! ```

pub mod driver;
pub mod options;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lm_lexer=debug` or `RUST_LOG=trace`. Logs go to
/// stderr so they never mix with diagnostics or token dumps.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
