//! CLI integration tests
//!
//! These tests drive the built `fwlens` binary end to end over temp-file
//! export documents.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn write_export(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

fn baseline_doc() -> &'static str {
    r#"[
        {
            "policy": {"id": "p1", "name": "Edge"},
            "rules": [
                {"id": "r1", "name": "allow-web", "action": "allow", "enabled": true},
                {"id": "r2", "name": "block-ftp", "action": "block", "enabled": true}
            ]
        }
    ]"#
}

fn current_doc() -> &'static str {
    r#"[
        {
            "policy": {"id": "p1", "name": "Edge"},
            "rules": [
                {"id": "r1", "name": "allow-web", "action": "allow", "enabled": false},
                {"id": "r3", "name": "allow-dns", "action": "allow", "enabled": true}
            ]
        }
    ]"#
}

#[test]
fn test_rules_table_lists_normalized_rows() {
    let dir = TempDir::new().unwrap();
    let export = write_export(&dir, "export.json", baseline_doc());

    let output = Command::new(env!("CARGO_BIN_EXE_fwlens"))
        .args(["rules", "--input", export.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("allow-web"));
    assert!(stdout.contains("block-ftp"));
    assert!(stdout.contains("2 rules"));
}

#[test]
fn test_rules_json_applies_filters() {
    let dir = TempDir::new().unwrap();
    let export = write_export(&dir, "export.json", current_doc());

    let output = Command::new(env!("CARGO_BIN_EXE_fwlens"))
        .args([
            "rules",
            "--input",
            export.to_str().unwrap(),
            "--enabled-only",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be a JSON array");
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["ruleName"], "allow-dns");
    // Normalization upper-cases the action
    assert_eq!(rows[0]["action"], "ALLOW");
}

#[test]
fn test_rules_requires_exactly_one_source() {
    let output = Command::new(env!("CARGO_BIN_EXE_fwlens"))
        .args(["rules"])
        .output()
        .expect("Failed to execute CLI");
    assert!(!output.status.success());
}

#[test]
fn test_diff_json_reports_changes() {
    let dir = TempDir::new().unwrap();
    let baseline = write_export(&dir, "baseline.json", baseline_doc());
    let current = write_export(&dir, "current.json", current_doc());

    let output = Command::new(env!("CARGO_BIN_EXE_fwlens"))
        .args([
            "diff",
            "--baseline",
            baseline.to_str().unwrap(),
            "--current",
            current.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be a JSON report");
    assert_eq!(report["summary"]["addedRules"], 1);
    assert_eq!(report["summary"]["removedRules"], 1);
    assert_eq!(report["summary"]["modifiedRules"], 1);
    assert_eq!(report["modified"][0]["key"], "p1::r1");
    assert!(report["baselineLabel"]
        .as_str()
        .unwrap()
        .ends_with("baseline.json"));
}

#[test]
fn test_diff_summary_renders_markdown() {
    let dir = TempDir::new().unwrap();
    let baseline = write_export(&dir, "baseline.json", baseline_doc());
    let current = write_export(&dir, "current.json", current_doc());

    let output = Command::new(env!("CARGO_BIN_EXE_fwlens"))
        .args([
            "diff",
            "--baseline",
            baseline.to_str().unwrap(),
            "--current",
            current.to_str().unwrap(),
            "--format",
            "summary",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("## Rule Change Report"));
    assert!(stdout.contains("### Added Rules"));
    assert!(stdout.contains("p1::r3"));
}

#[test]
fn test_missing_file_fails_with_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_fwlens"))
        .args(["rules", "--input", "/nonexistent/export.json"])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"));
}
