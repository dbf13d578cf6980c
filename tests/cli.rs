//! End-to-end tests for the `docsearch` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("search")
}

/// Isolated config directory so a user config can't change results
fn config_home() -> PathBuf {
    let dir = std::env::temp_dir()
        .join("docsearch_cli_tests")
        .join(format!("config_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    dir
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docsearch"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home())
        .env_remove("DOCSEARCH_LOG")
        .output()
        .expect("Failed to run docsearch")
}

fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "docsearch {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn test_query_json() {
    let index = fixture_dir();
    let stdout = run_ok(&["--index", index.to_str().unwrap(), "query", "withf", "--json"]);

    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["key"], "withfilemanagement");
    assert_eq!(entries[0]["records"].as_array().unwrap().len(), 2);
    assert_eq!(entries[1]["records"][0]["label"], "withFirmwareUpdate");
}

#[test]
fn test_query_count() {
    let index = fixture_dir();
    let stdout = run_ok(&["--index", index.to_str().unwrap(), "query", "withf", "--count"]);
    assert_eq!(stdout.trim(), "3");

    let stdout = run_ok(&["--index", index.to_str().unwrap(), "query", "nomatch", "--count"]);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn test_query_flat_output() {
    let index = fixture_dir();
    let stdout = run_ok(&[
        "--index",
        index.to_str().unwrap(),
        "query",
        "WOLK_CONNECT",
        "--flat",
        "--no-color",
    ]);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "WOLK_CONNECT_VERSION_MAJOR\tVersion.h\t../_version_8h.html#a90a889ddce439d02a1ad5fa9c5d6bafa"
    );
}

#[test]
fn test_query_substring_with_limit() {
    let index = fixture_dir();
    let stdout = run_ok(&[
        "--index",
        index.to_str().unwrap(),
        "query",
        "version",
        "--substring",
        "--limit",
        "2",
        "--count",
    ]);
    assert_eq!(stdout.trim(), "2");
}

#[test]
fn test_stats() {
    let index = fixture_dir();
    let stdout = run_ok(&["--index", index.to_str().unwrap(), "stats"]);
    assert!(stdout.contains("Entries:          19"));
    assert!(stdout.contains("Records:          22"));
    assert!(stdout.contains("wolkabout::WolkBuilder"));
}

#[test]
fn test_dump_round_trips_through_json() {
    let index = fixture_dir();
    let dump = run_ok(&["--index", index.to_str().unwrap(), "dump"]);

    let path = std::env::temp_dir().join(format!("docsearch_dump_{}.json", std::process::id()));
    fs::write(&path, &dump).unwrap();

    let stdout = run_ok(&["--index", path.to_str().unwrap(), "query", "", "--count", "--limit", "0"]);
    assert_eq!(stdout.trim(), "22");

    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_index_fails() {
    let output = run(&["--index", "/nonexistent/docsearch/search", "query", "wolk"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load search index"));
}
