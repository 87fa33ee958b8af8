// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use crate::cli::{Args, run};
pub use crate::core::collector::{collect, collect_all};
pub use crate::core::config::{load_config, load_config_or_default};
pub use crate::core::copier::{CopyReport, copy_file, copy_files, next_backup_path};
pub use crate::core::export::{export, render, render_csv, render_markdown};
pub use crate::core::filter::{apply_filter, apply_filters, compile_rule};
pub use crate::core::pipeline::run_pipeline;
pub use crate::models::{
    Columns, Config, FileRecord, FilterRule, OutputFormat, RunOptions, RunSummary,
};
pub use crate::utils::{ConsoleReporter, ProgressReporter, Stage};
