//! Integration tests for the portmap CLI
//!
//! These tests run the built binary end to end:
//! - label/color lookups with and without a config fallback
//! - --strict exit status for unmapped ports
//! - export to a file
//! - annotate reading rows from stdin

use portmaps::export::{self, OutputFormat};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const PORTMAP: &str = env!("CARGO_BIN_EXE_portmap");

/// Run portmap with `dir` as working directory so `.portmap.yaml` is looked up there
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(PORTMAP)
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run portmap")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn write_config(dir: &Path, yaml: &str) {
    fs::write(dir.join(".portmap.yaml"), yaml).unwrap();
}

#[test]
fn test_label_and_color_for_mapped_port() {
    let temp_dir = TempDir::new().unwrap();

    let label = run(temp_dir.path(), &["label", "73"]);
    assert!(label.status.success());
    assert_eq!(stdout(&label), "Map Report\n");

    let color = run(temp_dir.path(), &["color", "73"]);
    assert!(color.status.success());
    assert_eq!(stdout(&color), "#9999ff\n");
}

#[test]
fn test_unmapped_port_prints_default_fallback() {
    let temp_dir = TempDir::new().unwrap();

    let label = run(temp_dir.path(), &["label", "999"]);
    assert!(label.status.success());
    assert_eq!(stdout(&label), "Port 999\n");

    let color = run(temp_dir.path(), &["color", "999"]);
    assert!(color.status.success());
    assert_eq!(stdout(&color), "#6c757d\n");
}

#[test]
fn test_unmapped_port_prints_configured_fallback() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        "fallback:\n  label: \"Other ({code})\"\n  color: \"#000000\"\n",
    );

    let label = run(temp_dir.path(), &["label", "999"]);
    assert!(label.status.success());
    assert_eq!(stdout(&label), "Other (999)\n");

    let color = run(temp_dir.path(), &["color", "999"]);
    assert!(color.status.success());
    assert_eq!(stdout(&color), "#000000\n");

    // --config points at a file outside the working directory
    let other_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".portmap.yaml");
    let explicit = run(
        other_dir.path(),
        &["--config", config_path.to_str().unwrap(), "label", "2"],
    );
    assert!(explicit.status.success());
    assert_eq!(stdout(&explicit), "Other (2)\n");
}

#[test]
fn test_strict_fails_for_unmapped_port() {
    let temp_dir = TempDir::new().unwrap();

    let label = run(temp_dir.path(), &["label", "999", "--strict"]);
    assert!(!label.status.success());
    assert!(stdout(&label).is_empty());

    let color = run(temp_dir.path(), &["color", "999", "--strict"]);
    assert!(!color.status.success());

    // Mapped ports are unaffected by --strict
    let mapped = run(temp_dir.path(), &["label", "0", "--strict"]);
    assert!(mapped.status.success());
    assert_eq!(stdout(&mapped), "UNKNOWN\n");
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "fallbak:\n  label: Other\n");

    let output = run(temp_dir.path(), &["label", "1"]);
    assert!(!output.status.success());
}

#[test]
fn test_list_uses_requested_format() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["list", "--format", "js"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), export::render(OutputFormat::Js).unwrap());

    let invalid = run(temp_dir.path(), &["list", "--format", "csv"]);
    assert!(!invalid.status.success());
}

#[test]
fn test_list_defaults_to_config_format() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "format: json\n");

    let output = run(temp_dir.path(), &["list"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), export::render(OutputFormat::Json).unwrap());
}

#[test]
fn test_export_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("portmaps.js");

    let output = run(
        temp_dir.path(),
        &["export", "--out", out.to_str().unwrap()],
    );
    assert!(output.status.success());

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, export::render(OutputFormat::Js).unwrap());

    let yaml_out = temp_dir.path().join("portmaps.yaml");
    let output = run(
        temp_dir.path(),
        &["export", "--format", "yaml", "--out", yaml_out.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&yaml_out).unwrap(),
        export::render(OutputFormat::Yaml).unwrap()
    );
}

#[test]
fn test_export_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("missing").join("portmaps.js");

    let output = run(temp_dir.path(), &["export", "--out", out.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_annotate_reads_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let rows = r#"[
        {"long_name": "Relay", "portnum": 70, "packet_count": 5},
        {"long_name": "Relay", "portnum": 1, "packet_count": 9},
        {"long_name": "Relay", "portnum": 70, "packet_count": 6}
    ]"#;

    let mut child = Command::new(PORTMAP)
        .current_dir(temp_dir.path())
        .args(["annotate", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run portmap annotate");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(rows.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value[0]["portnum"], 70);
    assert_eq!(value[0]["label"], "Traceroute");
    assert_eq!(value[0]["packet_count"], 11);
    assert_eq!(value[1]["portnum"], 1);
    assert_eq!(value[1]["color"], "#007bff");
}

#[test]
fn test_annotate_reads_file_and_rejects_bad_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("traffic.json");
    fs::write(&input, r#"[{"portnum": 257, "packet_count": 3}]"#).unwrap();

    let output = run(temp_dir.path(), &["annotate", input.to_str().unwrap()]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value[0]["label"], "Port 257");
    assert_eq!(value[0]["known"], false);

    fs::write(&input, "{not json").unwrap();
    let bad = run(temp_dir.path(), &["annotate", input.to_str().unwrap()]);
    assert!(!bad.status.success());
}
