// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Tests for the optemplate binary: exit codes, diagnostics, output files

use optemplate::output::SignatureReport;
use std::io::Write;
use std::process::{Command, Output};

fn optemplate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_optemplate"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("OPTEMPLATE_LOG")
        .output()
        .expect("Failed to run optemplate")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_default_operators_to_stdout() {
    let output = optemplate(&["-c", "Foo"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "bool operator==(const Foo& cmp) const;");
    assert_eq!(lines[8], "auto operator()(const Foo& cmp);");
}

#[test]
fn test_missing_class_fails_without_output() {
    let output = optemplate(&["--comparators"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--class"), "stderr: {stderr}");
}

#[test]
fn test_empty_class_is_usage_error() {
    let output = optemplate(&["-c", ""]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: a class name must be provided"), "stderr: {stderr}");
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
}

#[test]
fn test_missing_output_file_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ops.hpp");
    let output = optemplate(&["-c", "Foo", "-o", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a file"));
    assert!(!path.exists());
}

#[test]
fn test_existing_output_file_overwritten() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "old line").unwrap();
    let output = optemplate(&[
        "-c", "Foo", "--increment", "-o", file.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(
        written,
        "Foo& operator++();\nFoo operator++(int);\nFoo& operator--();\nFoo operator--(int);\n"
    );
}

#[test]
fn test_dash_means_stdout() {
    let output = optemplate(&["-c", "Foo", "--call", "-o", "-"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["auto operator()(const Foo& cmp);"]);
}

#[test]
fn test_all_flag() {
    let output = optemplate(&["-c", "Foo", "--all", "--comparators"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l == "void operator delete[](void* ptr) noexcept;"));
    assert!(lines.iter().any(|l| l == "Foo& operator=(const Foo& cmp);"));
}

#[test]
fn test_bad_arg_map() {
    let output = optemplate(&["-c", "Foo", "--arg_map", "bitwise:int"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid operator category: bitwise"));
}

#[test]
fn test_json_report() {
    let output = optemplate(&[
        "-c", "Foo", "-n", "geo", "--arithmatic", "--arg_map", "arithmetic:double", "--format", "json",
    ]);
    assert!(output.status.success());
    let report: SignatureReport = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.class, "Foo");
    assert_eq!(report.namespace.as_deref(), Some("geo"));
    assert!(report.generated.is_none());
    assert_eq!(report.signatures.len(), 4);
    assert_eq!(
        report.signatures[0].declarations,
        vec!["geo::Foo operator+(const double& cmp) const;"]
    );
}

#[test]
fn test_header_banner() {
    let output = optemplate(&["-c", "Foo", "--call", "--header"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "// Operator declarations for Foo");
    assert!(lines[1].starts_with("// Generated by optemplate on "));
    assert_eq!(lines[2], "auto operator()(const Foo& cmp);");
}

#[test]
fn test_template_class_name() {
    let output = optemplate(&["-c", "Matrix<T>", "--comparators"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)[0], "bool operator==(const Matrix<T>& cmp) const;");
}
