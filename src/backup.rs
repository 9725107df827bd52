//! Backup export and import
//!
//! A backup is a JSON document holding the whole collection and the time it
//! was taken:
//!
//! ```json
//! {
//!   "bookmarks": [ ... ],
//!   "exportedAt": "2026-10-18T09:30:00.000Z"
//! }
//! ```
//!
//! Import is strict about the outer layout: the `bookmarks` field must exist
//! and be an array of records, otherwise the file is rejected as a whole.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::bookmark::Bookmark;

/// Default file name offered for exports
pub const DEFAULT_BACKUP_FILE: &str = "bookmarks-backup.json";

/// Errors raised while reading or writing backups
#[derive(Debug, Error)]
pub enum BackupError {
    /// The file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not JSON at all
    #[error("Cannot read JSON file: {0}")]
    Unreadable(#[from] serde_json::Error),

    /// JSON, but not a backup document
    #[error("Invalid backup file: {0}")]
    Invalid(String),
}

/// Exported document layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub bookmarks: Vec<Bookmark>,
    pub exported_at: String,
}

impl Backup {
    /// Wrap `bookmarks` with an ISO-8601 timestamp for `at`
    #[must_use]
    pub fn new(bookmarks: Vec<Bookmark>, at: DateTime<Utc>) -> Self {
        Self {
            bookmarks,
            exported_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Pretty-printed JSON, two-space indent
    ///
    /// # Errors
    ///
    /// Returns `BackupError` if serialization fails.
    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the backup to `path`
    ///
    /// # Errors
    ///
    /// Returns `BackupError` if serialization fails or the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<(), BackupError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Extract the collection from backup text
///
/// Only the `bookmarks` array is required; `exportedAt` and any other
/// top-level fields are ignored.
///
/// # Errors
///
/// Returns `BackupError::Unreadable` if `text` is not JSON, and
/// `BackupError::Invalid` if `bookmarks` is missing, is not an array, or
/// holds entries that are not bookmark records.
pub fn parse(text: &str) -> Result<Vec<Bookmark>, BackupError> {
    let document: Value = serde_json::from_str(text)?;
    let Some(Value::Array(entries)) = document.get("bookmarks") else {
        return Err(BackupError::Invalid("missing 'bookmarks' array".into()));
    };
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bookmark::deserialize(entry)
                .map_err(|e| BackupError::Invalid(format!("entry {i}: {e}")))
        })
        .collect()
}

/// Read and parse a backup file
///
/// # Errors
///
/// Returns `BackupError` if the file cannot be read or is not a valid backup.
pub fn read_from(path: &Path) -> Result<Vec<Bookmark>, BackupError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::testing::bookmark;

    #[test]
    fn test_exported_at_is_iso_8601_utc_millis() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let backup = Backup::new(vec![], at);
        assert_eq!(backup.exported_at, "2026-10-18T09:30:00.000Z");
    }

    #[test]
    fn test_json_layout() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let backup = Backup::new(vec![bookmark(1, "one", &["a"])], at);
        let json: Value = serde_json::from_str(&backup.to_json().unwrap()).unwrap();

        assert!(json["bookmarks"].is_array());
        assert_eq!(json["bookmarks"][0]["title"], "one");
        assert_eq!(json["exportedAt"], "2026-01-02T03:04:05.000Z");
        assert!(backup.to_json().unwrap().contains("\n  \"bookmarks\""));
    }

    #[test]
    fn test_parse_reads_exported_document() {
        let records = vec![bookmark(1, "one", &["a"]), bookmark(2, "two", &[])];
        let text = Backup::new(records.clone(), Utc::now()).to_json().unwrap();
        assert_eq!(parse(&text).unwrap(), records);
    }

    #[test]
    fn test_parse_rejects_non_array_bookmarks() {
        let err = parse(r#"{"bookmarks": "not-an-array"}"#).unwrap_err();
        assert!(matches!(err, BackupError::Invalid(_)));
    }

    #[test]
    fn test_parse_rejects_missing_bookmarks() {
        assert!(matches!(parse(r#"{"items": []}"#), Err(BackupError::Invalid(_))));
        assert!(matches!(parse("[]"), Err(BackupError::Invalid(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_entries() {
        let err = parse(r#"{"bookmarks": [{"title": "no id"}]}"#).unwrap_err();
        assert!(err.to_string().contains("entry 0"));
    }

    #[test]
    fn test_parse_distinguishes_unreadable_json() {
        assert!(matches!(parse("{not json"), Err(BackupError::Unreadable(_))));
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse(r#"{"bookmarks": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_BACKUP_FILE);
        let records = vec![bookmark(5, "five", &["x"])];

        Backup::new(records.clone(), Utc::now()).write_to(&path).unwrap();

        assert_eq!(read_from(&path).unwrap(), records);
    }
}
