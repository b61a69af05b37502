//! Command-line options.
//!
//! A plain walk over the argument vector; there are few enough flags that
//! a parser crate would add nothing.

use std::path::PathBuf;

use lm_diagnostic::ColorMode;
use rustc_hash::FxHashSet;

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Lex(Options),
}

/// Settings for one lexing run. None of them change tokenization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Input files, deduplicated, in first-seen order.
    pub files: Vec<PathBuf>,
    /// Print per-file lexing time and throughput.
    pub benchmark: bool,
    /// Print every token.
    pub dump_tokens: bool,
    /// Lex files on a thread pool.
    pub parallel: bool,
    pub color: ColorMode,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{0}' for --color (expected auto, always, or never)")]
    InvalidColor(String),
    #[error("no input files")]
    NoInputFiles,
}

/// Parse arguments, excluding the program name.
///
/// `--help` and `--version` win over everything else on the line.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, OptionsError> {
    let mut options = Options::default();
    let mut seen = FxHashSet::default();

    for arg in args.iter().map(AsRef::as_ref) {
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--benchmark" => options.benchmark = true,
            "--tokens" => options.dump_tokens = true,
            "--parallel" => options.parallel = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--color=") {
                    options.color = parse_color(value)?;
                } else if arg.starts_with('-') && arg != "-" {
                    return Err(OptionsError::UnknownOption(arg.to_string()));
                } else if seen.insert(arg) {
                    options.files.push(PathBuf::from(arg));
                } else {
                    tracing::debug!(file = arg, "ignoring duplicate input file");
                }
            }
        }
    }

    if options.files.is_empty() {
        return Err(OptionsError::NoInputFiles);
    }
    Ok(Command::Lex(options))
}

fn parse_color(value: &str) -> Result<ColorMode, OptionsError> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        other => Err(OptionsError::InvalidColor(other.to_string())),
    }
}
