//! Exit code tests for the `verify-build` binary.
//!
//! The binary is configured only through `ZANTAKU__*` variables, so each run
//! points it at a temp directory and clears anything inherited.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_verify_build(output_dir: &Path, strict: bool) -> Output {
    let workdir = TempDir::new().unwrap();
    let mut command = Command::new(env!("CARGO_BIN_EXE_verify-build"));
    for (key, _) in std::env::vars() {
        if key.starts_with("ZANTAKU") {
            command.env_remove(key);
        }
    }
    command
        .current_dir(workdir.path())
        .env("ZANTAKU__VERIFIER__OUTPUT_DIR", output_dir)
        .env("ZANTAKU__VERIFIER__STRICT", strict.to_string())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn dist_with_findings() -> TempDir {
    let dist = TempDir::new().unwrap();
    fs::create_dir_all(dist.path().join("assets")).unwrap();
    fs::write(dist.path().join("index.html"), "<html><head></head></html>").unwrap();
    fs::write(
        dist.path().join("assets/index.js"),
        "const API_KEY = \"sk_live_123\";fetch(\"https://evil-tracker.example.com/t\");",
    )
    .unwrap();
    dist
}

#[test]
fn missing_output_dir_exits_non_zero() {
    let parent = TempDir::new().unwrap();

    let output = run_verify_build(&parent.path().join("dist"), false);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Scanned"));
}

#[test]
fn findings_and_missing_csp_are_advisory() {
    let dist = dist_with_findings();

    let output = run_verify_build(dist.path(), false);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scanned 2 files: 1 error(s), 2 warning(s)"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn strict_mode_fails_on_missing_csp() {
    let dist = dist_with_findings();

    let output = run_verify_build(dist.path(), true);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn clean_build_exits_zero_in_strict_mode() {
    let dist = TempDir::new().unwrap();
    fs::write(
        dist.path().join("index.html"),
        r#"<meta http-equiv="Content-Security-Policy" content="default-src 'self'">"#,
    )
    .unwrap();

    let output = run_verify_build(dist.path(), true);

    assert_eq!(output.status.code(), Some(0));
}
