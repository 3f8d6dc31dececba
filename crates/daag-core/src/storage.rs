// Rust guideline compliant 2026-02-06

//! Storage module for database file retrieval.
//!
//! All text retrieval funnels through `read_text`; the rest of the core
//! never touches the filesystem.

use crate::{Error, Result};
use std::path::Path;

/// Reads a database file into a string.
///
/// # Arguments
///
/// * `path` - Path to the database file
///
/// # Returns
///
/// The file contents on success.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist
/// - The path is not a regular file
/// - The file cannot be read
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::DatabaseNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}
