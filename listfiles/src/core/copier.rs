// src/core/copier.rs
use crate::models::FileRecord;
use crate::utils::{ProgressReporter, Stage};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Outcome of a copy batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Destination paths written.
    pub copied: Vec<PathBuf>,
    /// Sources that already were the destination file.
    pub skipped: Vec<PathBuf>,
    /// Sources that could not be copied, with the error text.
    pub failed: Vec<(PathBuf, String)>,
}

/// Parses the `N` out of `<name>.~N~`.
fn backup_number(candidate: &str, name: &str) -> Option<u32> {
    candidate
        .strip_prefix(name)?
        .strip_prefix(".~")?
        .strip_suffix('~')?
        .parse()
        .ok()
}

/// Next free numbered backup for `dest`: one past the highest
/// existing `<name>.~N~` in the same directory, starting at 1.
///
/// # Errors
///
/// This function may return an error if:
/// * `dest` has no file name
/// * The parent directory cannot be listed
#[inline]
pub fn next_backup_path(dest: &Path) -> Result<PathBuf> {
    let name = dest
        .file_name()
        .with_context(|| format!("Destination has no file name: {}", dest.display()))?
        .to_string_lossy()
        .into_owned();
    let parent = dest.parent().unwrap_or_else(|| Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let mut highest = 0;
    for entry in fs::read_dir(parent)
        .with_context(|| format!("Failed to list directory: {}", parent.display()))?
    {
        let entry = entry?;
        if let Some(n) = backup_number(&entry.file_name().to_string_lossy(), &name) {
            highest = highest.max(n);
        }
    }

    Ok(dest.with_file_name(format!("{name}.~{}~", highest.saturating_add(1))))
}

/// Copies `source` to `dest`, renaming an existing destination
/// to its next numbered backup first.
///
/// # Arguments
///
/// * `source` - File to copy
/// * `dest` - Full destination path
///
/// # Returns
///
/// * `Ok(Some(PathBuf))` - The backup the previous destination was moved to
/// * `Ok(None)` - Nothing was in the way
///
/// # Errors
///
/// This function may return an error if:
/// * The destination directory cannot be created
/// * The existing destination cannot be renamed
/// * The source cannot be read or the destination cannot be written
#[inline]
pub fn copy_file(source: &Path, dest: &Path) -> Result<Option<PathBuf>> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let backup = if fs::symlink_metadata(dest).is_ok() {
        let backup = next_backup_path(dest)?;
        fs::rename(dest, &backup).with_context(|| {
            format!(
                "Failed to back up {} to {}",
                dest.display(),
                backup.display()
            )
        })?;
        debug!("backed up {} to {}", dest.display(), backup.display());
        Some(backup)
    } else {
        None
    };

    fs::copy(source, dest).with_context(|| {
        format!("Failed to copy {} to {}", source.display(), dest.display())
    })?;
    Ok(backup)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copies every record into `dest_dir` under its file name. A failing copy is
/// logged and recorded; the rest of the batch still runs.
#[inline]
pub fn copy_files(
    records: &[FileRecord],
    dest_dir: &Path,
    reporter: &dyn ProgressReporter,
) -> CopyReport {
    let mut report = CopyReport::default();

    for record in records {
        let dest = dest_dir.join(&record.filename);
        reporter.report(&Stage::CopyingFile {
            from: &record.path,
            to: &dest,
        });

        if is_same_file(&record.path, &dest) {
            warn!("{} is already in place, skipping", record.path.display());
            report.skipped.push(record.path.clone());
            continue;
        }

        match copy_file(&record.path, &dest) {
            Ok(_) => report.copied.push(dest),
            Err(err) => {
                error!("{err:#}");
                report.failed.push((record.path.clone(), format!("{err:#}")));
            }
        }
    }

    report
}
