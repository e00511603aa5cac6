#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use anyhow::{Result, ensure};
use assert_cmd::Command;
use tempfile::TempDir;

fn taskflow(data_dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::cargo_bin("taskflow")?
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    ensure!(
        output.status.success(),
        "taskflow {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8(output.stdout)?)
}

#[test]
fn add_list_and_stats_persist_between_runs() -> Result<()> {
    let dir = TempDir::new()?;
    taskflow(dir.path(), &["add", "Buy", "milk", "--category", "Shopping"])?;
    taskflow(dir.path(), &["add", "Write report", "-c", "work"])?;

    let listing = taskflow(dir.path(), &["ls", "--sort", "oldest"])?;
    let milk = listing.find("Buy milk").unwrap_or(usize::MAX);
    let report = listing.find("Write report").unwrap_or(usize::MAX);
    assert!(milk < report, "oldest first:\n{listing}");
    assert!(listing.contains("2 pending, 0 completed, total 2"));

    let raw = fs::read_to_string(dir.path().join("taskflow-data.json"))?;
    let stored: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(stored[0]["text"], "Write report");
    assert_eq!(stored[0]["category"], "Work");
    assert_eq!(stored[0]["completed"], false);
    assert!(stored[0]["createdAt"].is_i64());
    Ok(())
}

#[test]
fn json_listing_filters_by_category_and_search() -> Result<()> {
    let dir = TempDir::new()?;
    taskflow(dir.path(), &["add", "Buy milk", "-c", "Shopping"])?;
    taskflow(dir.path(), &["add", "Milk the goat", "-c", "Personal"])?;

    let json = taskflow(
        dir.path(),
        &["ls", "--category", "Personal", "--search", "MILK", "--format", "json"],
    )?;
    let tasks: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(tasks.as_array().map(Vec::len), Some(1));
    assert_eq!(tasks[0]["text"], "Milk the goat");
    Ok(())
}

#[test]
fn config_defaults_apply_to_add() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("config.toml"),
        "[storage]\ndir = \"data\"\n\n[defaults]\ncategory = \"School\"\n",
    )?;
    let added = taskflow(dir.path(), &["add", "Read chapter 3"])?;
    assert!(added.contains("[School] Read chapter 3"));
    assert!(dir.path().join("data").join("taskflow-data.json").exists());
    Ok(())
}

#[test]
fn unknown_id_fails_with_message() -> Result<()> {
    let dir = TempDir::new()?;
    let output = Command::cargo_bin("taskflow")?
        .arg("--data-dir")
        .arg(dir.path())
        .args(["toggle", "abcd1234"])
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no task matches id 'abcd1234'"));
    Ok(())
}

#[test]
fn theme_toggle_is_remembered() -> Result<()> {
    let dir = TempDir::new()?;
    assert_eq!(taskflow(dir.path(), &["theme"])?, "light\n");
    assert_eq!(taskflow(dir.path(), &["theme", "toggle"])?, "switched to dark theme\n");
    assert_eq!(taskflow(dir.path(), &["theme", "show"])?, "dark\n");
    assert_eq!(fs::read_to_string(dir.path().join("taskflow-theme.json"))?, "true");
    Ok(())
}
