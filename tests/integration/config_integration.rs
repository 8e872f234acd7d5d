//! Integration tests for configuration loading through the CLI run context

use contextkit::cli::{Commands, RunContext};
use contextkit::config::ConfigLoader;
use contextkit::error::ApiError;
use std::fs;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{"identifier":"root","title":"Root","displayOrder":0,"typeInt":1,
    "children":[{"identifier":"z","title":"Z","displayOrder":5,"typeInt":9},
                {"identifier":"y","title":"Y","displayOrder":4,"typeInt":9}]}"#;

#[test]
fn test_explicit_config_file_drives_output() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("contextkit.toml");
    fs::write(
        &config_path,
        r#"
[output]
format = "json"
pretty = false
sort_children = true
"#,
    )
    .unwrap();
    let input = temp_dir.path().join("doc.json");
    fs::write(&input, DOCUMENT).unwrap();

    let ctx = RunContext::new(temp_dir.path().to_path_buf(), Some(config_path)).unwrap();
    assert_eq!(ctx.config().output.format, "json");

    let output = ctx
        .execute(&Commands::Inspect {
            input,
            format: None,
            sorted: false,
            max_depth: None,
        })
        .unwrap();
    assert!(!output.contains('\n'));
    let rows: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(rows[1]["identifier"], "y");
    assert_eq!(rows[2]["identifier"], "z");
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[output]\nformat = \"yaml\"\n").unwrap();

    let result = RunContext::new(temp_dir.path().to_path_buf(), Some(config_path));
    match result {
        Err(ApiError::ConfigError(message)) => assert!(message.contains("yaml")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("invalid configuration should be rejected"),
    }
}

#[test]
fn test_workspace_file_is_discovered() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        ConfigLoader::workspace_config_path(temp_dir.path()),
        "[logging]\nlevel = \"error\"\n",
    )
    .unwrap();

    let ctx = RunContext::new(temp_dir.path().to_path_buf(), None).unwrap();
    assert_eq!(ctx.config().logging.level, "error");
}
