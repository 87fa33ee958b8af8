// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::core::pipeline::run_pipeline;
use crate::models::{Columns, OutputFormat, RunOptions};
use crate::utils::{ConsoleReporter, draw_logo};

#[derive(Parser, Debug)]
#[command(
    name = "listfiles",
    author,
    version,
    about = "Generates a list of files based on filters (regex) in various file formats",
    long_about = None
)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Output file name without ending
    #[arg(short, long, default_value = "files")]
    pub filename: String,

    /// Export as markdown (default csv)
    #[arg(short, long)]
    pub markdown: bool,

    /// Only write the File and Path columns
    #[arg(short, long)]
    pub paths_only: bool,

    /// Copy the collected files to one directory
    #[arg(long)]
    pub copy: bool,

    /// Directory to copy the collected files to
    #[arg(long = "copydir", default_value = ".")]
    pub copy_dir: PathBuf,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't print the logo on start-up
    #[arg(long)]
    pub no_banner: bool,
}

impl From<&Args> for RunOptions {
    #[inline]
    fn from(args: &Args) -> Self {
        Self {
            config: args.config.clone(),
            filename: args.filename.clone(),
            format: if args.markdown {
                OutputFormat::Markdown
            } else {
                OutputFormat::Csv
            },
            columns: if args.paths_only {
                Columns::PathsOnly
            } else {
                Columns::Full
            },
            copy: args.copy,
            copy_dir: args.copy_dir.clone(),
        }
    }
}

/// Runs the listing with colored progress output.
///
/// # Errors
///
/// Returns an error when a root cannot be walked or a filter pattern is invalid.
#[inline]
pub fn run(args: Args) -> Result<()> {
    if !args.no_banner {
        println!("{}", draw_logo());
    }

    let options = RunOptions::from(&args);
    let summary = run_pipeline(&options, &ConsoleReporter)?;
    info!(
        collected = summary.collected,
        kept = summary.kept,
        copied = summary.copied,
        copy_failures = summary.copy_failures,
        "done"
    );
    Ok(())
}
