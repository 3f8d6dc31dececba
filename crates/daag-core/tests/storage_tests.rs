// Rust guideline compliant 2026-02-06

//! Unit tests for the storage module.

use daag_core::{read_text, Error};
use tempfile::TempDir;

#[test]
fn test_read_text_ok() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tickets.db");
    std::fs::write(&path, "DAAG-1,,,,,Open\n").unwrap();

    let text = read_text(&path).expect("readable file");
    assert_eq!(text, "DAAG-1,,,,,Open\n");
}

#[test]
fn test_read_text_missing_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.db");

    let result = read_text(&path);
    assert!(
        matches!(result, Err(Error::DatabaseNotFound(_))),
        "A nonexistent path is reported as not found"
    );
}

#[test]
fn test_read_text_directory() {
    let temp_dir = TempDir::new().unwrap();

    let result = read_text(temp_dir.path());
    assert!(
        matches!(result, Err(Error::NotAFile(_))),
        "A directory is not a database file"
    );
}
