// src/models/file_record.rs
use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::path::PathBuf;

/// Format used for the `Mod.time` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One leaf file found by the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub filename: String,
    pub size: Option<u64>,
    pub modified: Option<DateTime<Local>>,
}

impl FileRecord {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            filename,
            size: None,
            modified: None,
        }
    }

    /// Path as matched by filter rules and written by the exporter.
    #[inline]
    #[must_use]
    pub fn path_str(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }

    #[inline]
    #[must_use]
    pub fn formatted_modified(&self) -> Option<String> {
        self.modified
            .map(|time| time.format(TIMESTAMP_FORMAT).to_string())
    }
}
