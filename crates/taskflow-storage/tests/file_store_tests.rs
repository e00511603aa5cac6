#![allow(missing_docs)]

use anyhow::Result;
use std::fs;
use taskflow_storage::{FileStore, KeyValueStore, StoreAdapter, StoreError};

fn temp_store() -> Result<(tempfile::TempDir, FileStore)> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path().join("data"))?;
    Ok((dir, store))
}

#[test]
fn test_open_creates_directory() -> Result<()> {
    let (dir, store) = temp_store()?;
    assert!(dir.path().join("data").is_dir());
    assert_eq!(store.dir(), dir.path().join("data"));
    Ok(())
}

#[test]
fn test_values_survive_reopen() -> Result<()> {
    let (dir, store) = temp_store()?;
    store.set("taskflow-theme", "true")?;
    drop(store);

    let reopened = FileStore::open(dir.path().join("data"))?;
    assert_eq!(reopened.get("taskflow-theme")?.as_deref(), Some("true"));
    assert_eq!(
        fs::read_to_string(reopened.path_for("taskflow-theme")?)?,
        "true"
    );
    Ok(())
}

#[test]
fn test_missing_key_reads_as_none() -> Result<()> {
    let (_dir, store) = temp_store()?;
    assert_eq!(store.get("absent")?, None);
    store.remove("absent")?;
    Ok(())
}

#[test]
fn test_overwrite_leaves_no_temp_files() -> Result<()> {
    let (_dir, store) = temp_store()?;
    store.set("k", "first")?;
    store.set("k", "second")?;
    assert_eq!(store.get("k")?.as_deref(), Some("second"));

    let entries: Vec<_> = fs::read_dir(store.dir())?.collect::<std::io::Result<_>>()?;
    assert_eq!(entries.len(), 1);
    Ok(())
}

#[test]
fn test_path_like_keys_are_rejected() -> Result<()> {
    let (_dir, store) = temp_store()?;
    assert!(matches!(
        store.set("../outside", "x"),
        Err(StoreError::InvalidKey(_))
    ));
    Ok(())
}

#[test]
fn test_adapter_over_file_store_falls_back_on_corruption() -> Result<()> {
    let (_dir, store) = temp_store()?;
    fs::write(store.path_for("taskflow-data")?, "[{\"id\": 1")?;
    let adapter = StoreAdapter::new(store);

    let loaded: Vec<serde_json::Value> = adapter.load("taskflow-data", Vec::new());
    assert!(loaded.is_empty());

    adapter.save("taskflow-data", &vec![1, 2, 3])?;
    assert_eq!(adapter.load("taskflow-data", Vec::<u32>::new()), vec![1, 2, 3]);
    Ok(())
}
