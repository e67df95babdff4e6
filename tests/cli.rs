//! End-to-end CLI tests.
//!
//! These exercise the binary against temporary settings records; the TUI
//! itself is never started.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tomatui() -> Command {
    Command::cargo_bin("tomatui").unwrap()
}

#[test]
fn stats_with_missing_record_reports_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("settings");

    tomatui()
        .arg("stats")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions completed: 0"))
        .stdout(predicate::str::contains("25 min"));
}

#[test]
fn stats_reads_persisted_record() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("settings");
    std::fs::write(&settings, "40 10 1 0 7\n").unwrap();

    tomatui()
        .arg("stats")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions completed: 7"))
        .stdout(predicate::str::contains("40 min"))
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn stats_json_output() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("settings");
    std::fs::write(&settings, "30\n15\n0\n1\n3\n").unwrap();

    let output = tomatui()
        .arg("stats")
        .arg("-o")
        .arg("json")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["focus_minutes"], 30);
    assert_eq!(value["break_minutes"], 15);
    assert_eq!(value["completed_sessions"], 3);
}

#[test]
fn stats_with_malformed_record_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("settings");
    std::fs::write(&settings, "not a settings file at all\n").unwrap();

    tomatui()
        .arg("stats")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions completed: 0"));
}

#[test]
fn settings_path_from_environment() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("settings");
    std::fs::write(&settings, "45 20 0 1 11\n").unwrap();

    tomatui()
        .arg("stats")
        .env("TOMATUI_SETTINGS", &settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions completed: 11"));
}

#[test]
fn completions_bash() {
    tomatui()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("tomatui"));
}

#[test]
fn stats_alias() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("settings");

    tomatui()
        .arg("st")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions completed"));
}
