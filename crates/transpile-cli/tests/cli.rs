//! CLI integration tests using assert_cmd
//!
//! Tests the full CLI binary with real command-line arguments.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_ast(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("transpile")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("transpile")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("transpile"))
        .stdout(predicate::str::contains("--indent-width"));
}

const TRUE_STATEMENT_AST: &str = r#"{
    "data": {
        "kind": "SourceFile",
        "data": [
            {
                "data": {
                    "kind": "ExprStatement",
                    "data": { "data": { "kind": "True" } }
                }
            }
        ]
    }
}"#;

const CONTINUE_STATEMENT_AST: &str = r#"{
    "data": {
        "kind": "SourceFile",
        "data": [
            { "data": { "kind": "Continue" } }
        ]
    }
}"#;

#[test]
fn test_cli_translates_file_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = write_ast(&temp_dir, "ast.json", TRUE_STATEMENT_AST);

    Command::cargo_bin("transpile")
        .unwrap()
        .arg(&file_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_cli_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = write_ast(&temp_dir, "ast.json", TRUE_STATEMENT_AST);
    let out_path = temp_dir.path().join("out.lua");

    Command::cargo_bin("transpile")
        .unwrap()
        .arg(&file_path)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("true"));
}

#[test]
fn test_cli_stdin() {
    Command::cargo_bin("transpile")
        .unwrap()
        .arg("-")
        .write_stdin(TRUE_STATEMENT_AST)
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_cli_nonexistent_file() {
    Command::cargo_bin("transpile")
        .unwrap()
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_cli_malformed_json_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = write_ast(&temp_dir, "broken.json", "{ not json");

    Command::cargo_bin("transpile")
        .unwrap()
        .arg(&file_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_cli_unsupported_node_reports_translation_error() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = write_ast(&temp_dir, "ast.json", CONTINUE_STATEMENT_AST);

    Command::cargo_bin("transpile")
        .unwrap()
        .arg(&file_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to translate"));
}

#[test]
fn test_cli_indent_width_flag_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = write_ast(&temp_dir, "ast.json", TRUE_STATEMENT_AST);

    Command::cargo_bin("transpile")
        .unwrap()
        .arg(&file_path)
        .arg("--indent-width")
        .arg("2")
        .assert()
        .success();
}
