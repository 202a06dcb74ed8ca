//! End-to-end tests for the `ingen` binary.
//!
//! These run the compiled CLI against temporary config and log files. None of
//! them reach a real backend.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn ingen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ingen"))
        .args(args)
        .arg("--config")
        .arg(dir.join("config.ini"))
        .arg("--log")
        .arg(dir.join("adaptations.log"))
        .env_remove("INGEN_CONFIG")
        .env_remove("INGEN_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ingen binary")
}

fn write_fixture(dir: &Path, config: &str, log: Option<&str>) {
    fs::write(dir.join("config.ini"), config).unwrap();
    if let Some(log) = log {
        fs::write(dir.join("adaptations.log"), log).unwrap();
    }
}

#[test]
fn prompt_prints_exact_concatenation() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        dir.path(),
        "[General]\nuse_case_context = Ctx\nsystem_prompt = Sys\n",
        Some("a\nb\n"),
    );

    let out = ingen(dir.path(), &["prompt"]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Ctx\n\nSysa\nb\n");
}

#[test]
fn explain_without_log_exits_with_file_error() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "[General]\nllm = ollama\n", None);

    let out = ingen(dir.path(), &["explain", "001"]);

    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Log file error"), "stderr: {stderr}");
}

#[test]
fn explain_without_api_key_exits_with_config_error() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "[General]\nllm = openai\n", Some("event\n"));

    let out = ingen(dir.path(), &["explain"]);

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Credential required"), "stderr: {stderr}");
}

#[test]
fn unsupported_backend_is_named() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "[General]\nllm = palm\n", Some("event\n"));

    let out = ingen(dir.path(), &["explain"]);

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("palm"));
}

#[test]
fn backends_lists_all_variants() {
    let dir = tempfile::tempdir().unwrap();
    let out = ingen(dir.path(), &["backends"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for name in ["openai", "azure", "ollama"] {
        assert!(stdout.contains(name), "missing {name} in: {stdout}");
    }
}

#[test]
fn doctor_reports_missing_credential() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "[General]\nllm = openai\n", Some("one\ntwo\n"));

    let out = ingen(dir.path(), &["doctor"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Credential required"), "stdout: {stdout}");
    assert!(stdout.contains("2 lines"), "stdout: {stdout}");
}

#[test]
fn doctor_treats_missing_config_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("adaptations.log"), "one\n").unwrap();

    let out = ingen(dir.path(), &["doctor"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("using defaults"), "stdout: {stdout}");
    // Only the default backend's missing credential counts.
    assert!(stdout.contains("1 issue(s) found"), "stdout: {stdout}");
}
