//! Integration tests for the Tetra CLI.
//!
//! These tests invoke the `tetra` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn tetra() -> Command {
    Command::cargo_bin("tetra").unwrap()
}

/// Return the workspace root (parent of tetra-cli/).
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Return the absolute path to a test program file.
fn test_program(name: &str) -> PathBuf {
    workspace_root().join("tests/programs").join(name)
}

/// Helper: write source text to a temp file and return its path.
fn write_source(dir: &TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("test.tetra");
    fs::write(&path, source).unwrap();
    path
}

// ---- No-args / help ----

#[test]
fn no_args_prints_usage_and_exits_2() {
    tetra()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage: tetra"));
}

#[test]
fn help_flag_exits_0() {
    tetra()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn unknown_command_exits_2() {
    tetra().arg("frobnicate").assert().failure().code(2);
}

// ---- Run ----

#[test]
fn run_hello() {
    tetra()
        .args(["run", test_program("hello.tetra").to_str().unwrap()])
        .assert()
        .success()
        .stdout("Hi\n");
}

#[test]
fn run_countdown() {
    tetra()
        .args(["run", test_program("countdown.tetra").to_str().unwrap()])
        .assert()
        .success()
        .stdout("321");
}

#[test]
fn run_load_and_print() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "32 113\n20\n");

    tetra()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("7");
}

#[test]
fn run_divide_by_zero_exits_3() {
    tetra()
        .args(["run", test_program("divide_by_zero.tetra").to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("runtime error: line 3: divide by zero"));
}

#[test]
fn run_underflow_exits_3() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "32 11\n00\n");

    tetra()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("ADD requires at least 2 value(s)"));
}

#[test]
fn run_parse_error_exits_1_without_output() {
    tetra()
        .args(["run", test_program("bad_numeral.tetra").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("parse error: line 3: invalid numeral '19'"));
}

#[test]
fn run_missing_file_exits_1() {
    tetra()
        .args(["run", "nonexistent.tetra"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn run_output_before_runtime_error_is_flushed() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "32 11\n20\n20\n");

    tetra()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stdout("1");
}

// ---- Check ----

#[test]
fn check_reports_counts() {
    tetra()
        .args(["check", test_program("hello.tetra").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 instructions, 1 skipped lines"));
}

#[test]
fn check_does_not_execute() {
    tetra()
        .args(["check", test_program("divide_by_zero.tetra").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OK:"));
}

// ---- Disassemble ----

#[test]
fn disassemble_canonical_form() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "33 comment\n3 2 3 1 3\n2 0\n");

    tetra()
        .args(["disassemble", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("\n32 113\n20\n");
}

#[test]
fn disassembled_output_runs_the_same() {
    let dir = TempDir::new().unwrap();
    let output = tetra()
        .args(["disassemble", test_program("countdown.tetra").to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let path = write_source(&dir, &String::from_utf8(output.stdout).unwrap());

    tetra()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("321");
}
