//! CLI Integration Tests
//!
//! Verify the commands end-to-end: the wiring between the CLI and the core
//! engine, input handling, and failure modes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The lashon binary
fn cli_cmd() -> Command {
    Command::cargo_bin("lashon").expect("Failed to find lashon binary")
}

// ============================================================================
// Genderize Command Tests
// ============================================================================

#[test]
fn test_genderize_stdin_female() {
    cli_cmd()
        .args(["genderize", "--gender", "female"])
        .write_stdin("ברוך/ה הבא/ה")
        .assert()
        .success()
        .stdout("ברוכה הבאה");
}

#[test]
fn test_genderize_stdin_male() {
    cli_cmd()
        .args(["genderize", "-g", "male"])
        .write_stdin("{אתה|את} מוזמן/ת")
        .assert()
        .success()
        .stdout("אתה מוזמן");
}

#[test]
fn test_genderize_neutral_keeps_combined_spelling() {
    cli_cmd()
        .args(["genderize", "-g", "neutral"])
        .write_stdin("מוכן/ה")
        .assert()
        .success()
        .stdout("מוכן/ה");
}

#[test]
fn test_genderize_file_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("welcome.txt");
    std::fs::write(&path, "תלמידים/ות יקרים/ות").unwrap();

    cli_cmd()
        .args(["genderize", "--gender", "female"])
        .arg(&path)
        .assert()
        .success()
        .stdout("תלמידות יקרות");
}

#[test]
fn test_genderize_rejects_unknown_gender() {
    cli_cmd()
        .args(["genderize", "--gender", "plural"])
        .write_stdin("מוכן/ה")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown gender"));
}

#[test]
fn test_genderize_missing_file_fails() {
    cli_cmd()
        .args(["genderize", "-g", "male", "/no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading"));
}

// ============================================================================
// Scan Command Tests
// ============================================================================

#[test]
fn test_scan_lists_tokens() {
    cli_cmd()
        .arg("scan")
        .write_stdin("ברוך/ה הבא/ה")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 tokens"))
        .stdout(predicate::str::contains("male:    ברוך"))
        .stdout(predicate::str::contains("female:  ברוכה"));
}

#[test]
fn test_scan_without_tokens() {
    cli_cmd()
        .arg("scan")
        .write_stdin("שלום עולם")
        .assert()
        .success()
        .stdout(predicate::str::contains("No gendered tokens found"));
}
