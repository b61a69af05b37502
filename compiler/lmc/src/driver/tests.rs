use lm_diagnostic::ColorMode;
use pretty_assertions::assert_eq;

use super::*;

fn write_file(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => panic!("{e}"),
    };
    let _ = file.write_all(text.as_bytes());
    path
}

fn temp_dir() -> tempfile::TempDir {
    match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("{e}"),
    }
}

fn run_to_string(options: &Options) -> (Result<RunSummary, SourceError>, String) {
    let mut out = Vec::new();
    let result = run(options, &mut out, false);
    (result, String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn throughput_is_bytes_per_second_in_mib() {
    let mib = throughput_mib(1024 * 1024, Duration::from_secs(2));
    assert!((mib - 0.5).abs() < 1e-9);
}

#[test]
fn zero_elapsed_time_does_not_divide_by_zero() {
    assert!(throughput_mib(10, Duration::ZERO).is_finite());
}

#[test]
fn missing_file_fails_before_lexing() {
    let dir = temp_dir();
    let good = write_file(&dir, "good.lm", "?");
    let options = Options {
        files: vec![good, dir.path().join("missing.lm")],
        color: ColorMode::Never,
        ..Options::default()
    };
    let (result, out) = run_to_string(&options);
    assert!(matches!(result, Err(SourceError::NotFound { .. })));
    assert_eq!(out, "");
}

#[test]
fn clean_file_prints_nothing() {
    let dir = temp_dir();
    let path = write_file(&dir, "ok.lm", "fn main() { ret 0; }\n");
    let options = Options {
        files: vec![path],
        color: ColorMode::Never,
        ..Options::default()
    };
    let (result, out) = run_to_string(&options);
    assert_eq!(
        result.ok(),
        Some(RunSummary {
            files: 1,
            tokens: 10,
            errors: 0
        })
    );
    assert_eq!(out, "");
}

#[test]
fn token_dump_format() {
    let dir = temp_dir();
    let path = write_file(&dir, "d.lm", "let x = \"hi\"");
    let options = Options {
        files: vec![path.clone()],
        dump_tokens: true,
        color: ColorMode::Never,
        ..Options::default()
    };
    let (_, out) = run_to_string(&options);
    let expected = format!(
        "Tokens for '{}' (5 tokens):\n  Let @ 1:1\n  Ident(x) @ 1:5\n  Equal @ 1:7\n  StringLiteral(\"hi\") @ 1:9\n  Eof @ 1:13\n",
        path.display()
    );
    assert_eq!(out, expected);
}

#[test]
fn parallel_output_matches_sequential() {
    let dir = temp_dir();
    let files: Vec<PathBuf> = (0..6)
        .map(|i| write_file(&dir, &format!("f{i}.lm"), &format!("let v{i} = shared ? {i}\n'x")))
        .collect();
    let sequential = Options {
        files: files.clone(),
        dump_tokens: true,
        color: ColorMode::Never,
        ..Options::default()
    };
    let parallel = Options {
        parallel: true,
        ..sequential.clone()
    };

    let (seq_result, seq_out) = run_to_string(&sequential);
    let (par_result, par_out) = run_to_string(&parallel);
    assert_eq!(seq_result.ok(), par_result.ok());
    assert_eq!(seq_out, par_out);
    assert!(seq_out.ends_with("error: aborting due to 12 previous errors\n"));
}
