// src/models.rs
mod config;
mod file_record;
mod filter_rule;
mod run;

pub use config::Config;
pub use file_record::{FileRecord, TIMESTAMP_FORMAT};
pub use filter_rule::FilterRule;
pub use run::{Columns, OutputFormat, RunOptions, RunSummary};
