// src/models/run.rs
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Markdown,
}

impl OutputFormat {
    #[inline]
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Markdown => "md",
        }
    }
}

/// Which columns the exporter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Columns {
    /// File, Path, Size, Mod.time
    #[default]
    Full,
    /// File, Path
    PathsOnly,
}

impl Columns {
    #[inline]
    #[must_use]
    pub const fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Full => &["File", "Path", "Size", "Mod.time"],
            Self::PathsOnly => &["File", "Path"],
        }
    }
}

/// Everything a pipeline run needs from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub config: PathBuf,
    /// Output file name without extension.
    pub filename: String,
    pub format: OutputFormat,
    pub columns: Columns,
    pub copy: bool,
    pub copy_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from("config.toml"),
            filename: String::from("files"),
            format: OutputFormat::Csv,
            columns: Columns::Full,
            copy: false,
            copy_dir: PathBuf::from("."),
        }
    }
}

impl RunOptions {
    /// `<filename>.csv` or `<filename>.md`.
    #[inline]
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.filename, self.format.extension()))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub collected: usize,
    pub kept: usize,
    /// Set only when the export was written successfully.
    pub output: Option<PathBuf>,
    pub copied: usize,
    pub copy_failures: usize,
}
