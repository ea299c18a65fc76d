//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal UI starts are exercised here.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn analytics_screen_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_analytics-screen"))
}

#[test]
fn test_help_lists_options() {
    let output = analytics_screen_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-level"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = \"fast\"\n").unwrap();

    let output = analytics_screen_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to parse config file"),
        "Expected parse error, got: {}",
        stderr
    );
}

#[test]
fn test_missing_config_value_shows_error() {
    let output = analytics_screen_cmd()
        .arg("--config")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("a value is required") || stderr.contains("requires a value"),
        "Expected clap error about missing value, got: {}",
        stderr
    );
}
