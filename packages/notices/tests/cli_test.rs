//! Tests for the `notice-parser` binary.

use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("report.txt")
}

fn notice_parser() -> Command {
    Command::cargo_bin("notice-parser").expect("binary builds")
}

#[test]
fn test_parse_yaml_by_default() {
    notice_parser()
        .arg("parse")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("location_code: SE-ST-PCC1-07"))
        .stderr(predicate::str::contains("4 notices, 2 warnings"));
}

#[test]
fn test_parse_json_records() {
    let output = notice_parser()
        .args(["parse", "--format", "json", "--records"])
        .arg(fixture_path())
        .output()
        .expect("command runs");

    assert!(output.status.success());
    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(records[0]["date"], "2025-12-27 13:25");
    assert_eq!(records[0]["zone"], "HEA2");
    assert_eq!(records[3]["zone"], "PARQUE CHATARRA");
}

#[test]
fn test_warnings_go_to_stderr() {
    notice_parser()
        .arg("parse")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no timestamp found").not())
        .stderr(predicate::str::contains("Notice SE-SP-TR-01: no timestamp found"));
}

#[test]
fn test_parse_empty_file() {
    let file = NamedTempFile::new().expect("temp file");

    notice_parser()
        .args(["parse", "--format", "json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("0 notices, 0 warnings"));
}

#[test]
fn test_parse_inline_text() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        "Ub.Tec.: ABC-1 DESC\nClase Aviso: 30 X - Y - Some Title\n\
         27.12.2025 13:25:50 CET NAME (123)\nS:text"
    )
    .expect("write fixture");

    notice_parser()
        .args(["parse", "--format", "json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Some Title\""))
        .stdout(predicate::str::contains("\"situation\": \"text\""));
}

#[test]
fn test_missing_file_fails() {
    notice_parser()
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: IO error"));
}
