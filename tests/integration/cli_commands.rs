//! Integration tests running the contextkit binary end to end

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const VALID: &str = r#"{
    "identifier": "app",
    "title": "App",
    "displayOrder": 0,
    "typeInt": 1,
    "children": [
        {"identifier": "b", "title": "B", "displayOrder": 2, "typeInt": 10},
        {"identifier": "a", "title": "A", "displayOrder": 1, "typeInt": 999, "topicString": "math"}
    ]
}"#;

fn contextkit(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_contextkit"))
        .env("HOME", workspace.as_os_str())
        .env("XDG_CONFIG_HOME", workspace.join("config").as_os_str())
        .env_remove("CONTEXTKIT_LOG")
        .arg("--workspace")
        .arg(workspace)
        .arg("--quiet")
        .args(args)
        .output()
        .unwrap()
}

fn write_input(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("input.json");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_validate_success() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, VALID);
    let output = contextkit(dir.path(), &["validate", &input]);
    assert!(
        output.status.success(),
        "validate should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Contexts: 3"));
    assert!(stdout.contains("unrecognized typeInt"));
}

#[test]
fn test_validate_failure_exits_non_zero_with_path() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"identifier":"a","title":"A","displayOrder":0,"typeInt":0,
            "children":[{"identifier":"b","displayOrder":0,"typeInt":0}]}"#,
    );
    let output = contextkit(dir.path(), &["validate", &input]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing required field `title` at $.children[0]"));
}

#[test]
fn test_normalize_from_stdin() {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_contextkit"))
        .env("HOME", dir.path().as_os_str())
        .env("XDG_CONFIG_HOME", dir.path().join("config").as_os_str())
        .arg("--workspace")
        .arg(dir.path())
        .arg("--quiet")
        .args(["normalize", "-", "--sort", "--compact"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(VALID.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["children"][0]["identifier"], "a");
    assert_eq!(value["children"][0]["typeInt"], 999);
    assert_eq!(value["children"][0]["topicString"], "math");
}

#[test]
fn test_inspect_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, VALID);
    let output = contextkit(dir.path(), &["inspect", &input, "--format", "json"]);
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 3);
    assert_eq!(rows[2]["kind"], "none");
    assert_eq!(rows[2]["path"], "app/a");
}

#[test]
fn test_missing_file_reports_input_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let output = contextkit(dir.path(), &["validate", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read input"));
}
