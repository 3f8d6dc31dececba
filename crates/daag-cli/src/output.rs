// Rust guideline compliant 2026-02-06

//! Output formatting module for the Daag CLI.
//!
//! Maps every failure to the one-line stderr diagnostic
//! `<KIND> ERROR: <message>`.

use daag_core::Error as CoreError;

/// Formats an error as a one-line diagnostic, categorized by kind.
///
/// # Arguments
///
/// * `error` - The failure that aborted the run
///
/// # Returns
///
/// A string of the form `<KIND> ERROR: <message>`.
pub fn format_error(error: &anyhow::Error) -> String {
    let kind = if let Some(core) = error.downcast_ref::<CoreError>() {
        match core {
            CoreError::MalformedRecord(_) => "RECORD",
            CoreError::MissingStatus => "STATUS",
            CoreError::DatabaseNotFound(_) | CoreError::NotAFile(_) => "FILE",
            CoreError::Io(_) => "OS",
            CoreError::InvalidConfig(_) => "CONFIG",
        }
    } else if error.downcast_ref::<std::io::Error>().is_some() {
        "OS"
    } else {
        "GENERAL"
    };

    format!("{} ERROR: {}", kind, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_malformed_record() {
        let error = anyhow::Error::new(CoreError::MalformedRecord("DAAG-1,broken".to_string()));
        assert_eq!(
            format_error(&error),
            "RECORD ERROR: Malformed record: DAAG-1,broken"
        );
    }

    #[test]
    fn test_format_missing_status() {
        let error = anyhow::Error::new(CoreError::MissingStatus);
        assert_eq!(
            format_error(&error),
            "STATUS ERROR: No statuses found in the database"
        );
    }

    #[test]
    fn test_format_file_errors() {
        let error = anyhow::Error::new(CoreError::DatabaseNotFound(PathBuf::from("tickets.db")));
        assert!(format_error(&error).starts_with("FILE ERROR: "));

        let error = anyhow::Error::new(CoreError::NotAFile(PathBuf::from("/tmp")));
        assert!(format_error(&error).starts_with("FILE ERROR: "));
    }

    #[test]
    fn test_format_config_error() {
        let error = anyhow::Error::new(CoreError::InvalidConfig("bad engine".to_string()));
        assert!(format_error(&error).starts_with("CONFIG ERROR: "));
    }

    #[test]
    fn test_format_io_error() {
        let error = anyhow::Error::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(format_error(&error).starts_with("OS ERROR: "));
    }

    #[test]
    fn test_format_general_error() {
        let error = anyhow::anyhow!("--database entry may not be blank");
        assert_eq!(
            format_error(&error),
            "GENERAL ERROR: --database entry may not be blank"
        );
    }
}
