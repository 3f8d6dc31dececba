// Rust guideline compliant 2026-02-06

//! Error types for the Daag core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Daag operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Daag operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A database line does not decompose into the expected field structure.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// No non-empty status values exist across the parsed records.
    #[error("No statuses found in the database")]
    MissingStatus,

    /// Database path does not exist.
    #[error("Unable to find {}", .0.display())]
    DatabaseNotFound(PathBuf),

    /// Database path exists but is not a regular file.
    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
