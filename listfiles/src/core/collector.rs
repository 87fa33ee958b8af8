// src/core/collector.rs
use crate::models::FileRecord;
use crate::utils::{ProgressReporter, Stage};
use anyhow::{Context as _, Result};
use chrono::{DateTime, Local};
use std::path::Path;
use walkdir::WalkDir;

/// Walks `root` recursively and returns one record per non-directory entry.
///
/// Symbolic links are not followed, so a link shows up as a leaf of its own.
/// Records come back in walk order.
///
/// # Arguments
///
/// * `root` - The directory (or single file) to walk
///
/// # Returns
///
/// * `Ok(Vec<FileRecord>)` - Every file below `root`
///
/// # Errors
///
/// This function may return an error if:
/// * `root` does not exist or cannot be read
/// * Any directory below `root` cannot be read
#[inline]
pub fn collect(root: &Path) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let metadata = entry.metadata().ok();
        records.push(FileRecord {
            path: entry.path().to_path_buf(),
            filename: entry.file_name().to_string_lossy().into_owned(),
            size: metadata.as_ref().map(std::fs::Metadata::len),
            modified: metadata
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Local>::from),
        });
    }

    Ok(records)
}

/// Collects every root in order and concatenates the results, reporting
/// [`Stage::Collecting`] before each root.
///
/// # Errors
///
/// Fails on the first root that [`collect`] fails on.
#[inline]
pub fn collect_all<P: AsRef<Path>>(
    roots: &[P],
    reporter: &dyn ProgressReporter,
) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();
    for root in roots {
        let root = root.as_ref();
        reporter.report(&Stage::Collecting(root));
        records.extend(collect(root)?);
    }
    Ok(records)
}
