// src/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// `a.txt`, `b.log` and `sub/c.txt`.
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "a.txt", "alpha")?;
    create_test_file(&dir, "b.log", "log line")?;
    create_test_file(&dir, "sub/c.txt", "gamma")?;

    Ok(dir)
}
