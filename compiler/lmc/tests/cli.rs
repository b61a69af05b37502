// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the `lm` binary.
//!
//! Each test writes Lm sources into a temp dir, runs the real binary, and
//! checks stdout, stderr, and the exit status.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn lm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lm"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lm")
}

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// === Informational flags ===

#[test]
fn no_arguments_prints_usage() {
    let output = lm(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: lm [options] <file>..."));
}

#[test]
fn help_and_version() {
    let help = lm(&["--help"]);
    assert!(help.status.success());
    assert!(stdout(&help).contains("--benchmark"));

    let version = lm(&["--version"]);
    assert!(version.status.success());
    assert_eq!(stdout(&version), format!("lm {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_option_fails() {
    let output = lm(&["--wat", "x.lm"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: unknown option '--wat'"));
}

// === Lexing ===

#[test]
fn clean_file_succeeds_silently() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "ok.lm", "module demo\nfn add(a: i32, b: i32) -> i32 { ret a + b; }\n");
    let output = lm(&[file.to_str().unwrap(), "--color=never"]);
    assert!(output.status.success(), "{}", stdout(&output));
    assert_eq!(stdout(&output), "");
}

#[test]
fn lexical_errors_are_rendered_and_fail() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "bad.lm", "let s = \"open\nlet c = `;\n");
    let name = file.to_str().unwrap();
    let output = lm(&[name, "--color=never"]);

    assert_eq!(output.status.code(), Some(1));
    let expected = format!(
        "{name}:1:9: unterminated string literal\n\
         let s = \"open\n\
         \x20       ^\n\
         {name}:2:9: unknown token '`'\n\
         let c = `;\n\
         \x20       ^\n\
         error: aborting due to 2 previous errors\n"
    );
    assert_eq!(stdout(&output), expected);
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "good.lm", "?");
    let missing = dir.path().join("nope.lm");
    let output = lm(&[good.to_str().unwrap(), missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file"));
    // Nothing is lexed when any input is missing.
    assert_eq!(stdout(&output), "");
}

#[test]
fn duplicate_inputs_are_lexed_once() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "dup.lm", "?");
    let name = file.to_str().unwrap();
    let output = lm(&[name, name, "--color=never"]);
    assert_eq!(stdout(&output).matches("unknown token").count(), 1);
}

#[test]
fn benchmark_prints_throughput_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.lm", "let x = 1;\n");
    let b = write(dir.path(), "b.lm", "let y = 2.5;\n");
    let output = lm(&[a.to_str().unwrap(), b.to_str().unwrap(), "--benchmark"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&format!("info: {}: ", a.display())));
    assert!(lines[1].starts_with(&format!("info: {}: ", b.display())));
    assert!(lines.iter().all(|l| l.ends_with(" MiB/s")));
}

#[test]
fn parallel_flag_keeps_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let names: Vec<String> = (0..8)
        .map(|i| {
            let path = write(dir.path(), &format!("p{i}.lm"), &format!("x{i} ?"));
            path.to_str().unwrap().to_string()
        })
        .collect();
    let mut args: Vec<&str> = names.iter().map(String::as_str).collect();
    args.push("--parallel");
    args.push("--color=never");

    let output = lm(&args);
    assert_eq!(output.status.code(), Some(1));
    let headers: Vec<String> = stdout(&output)
        .lines()
        .filter(|l| l.contains("unknown token"))
        .map(|l| l.split(':').next().unwrap().to_string())
        .collect();
    assert_eq!(headers, names);
}
