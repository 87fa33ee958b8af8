// src/core/pipeline.rs
use crate::core::collector::collect_all;
use crate::core::config::load_config_or_default;
use crate::core::copier::copy_files;
use crate::core::export::export;
use crate::core::filter::apply_filters;
use crate::models::{RunOptions, RunSummary};
use crate::utils::{ProgressReporter, Stage};
use anyhow::Result;
use tracing::{error, info};

/// Runs config load, collection, filtering, export and the optional copy step.
///
/// A missing or unparsable config and a failed export are logged and the run
/// carries on. Traversal and pattern errors abort before anything is written.
///
/// # Arguments
///
/// * `options` - Paths and switches from the command line
/// * `reporter` - Receives a [`Stage`] before each stage starts
///
/// # Returns
///
/// * `Ok(RunSummary)` - Record counts and where the listing went
///
/// # Errors
///
/// This function may return an error if:
/// * A configured root does not exist or cannot be walked
/// * A filter pattern is not a valid regular expression
#[inline]
pub fn run_pipeline(options: &RunOptions, reporter: &dyn ProgressReporter) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    reporter.report(&Stage::Reading(&options.config));
    let config = load_config_or_default(&options.config);

    let records = collect_all(config.roots.as_slice(), reporter)?;
    summary.collected = records.len();

    let records = apply_filters(records, &config.filters, reporter)?;
    summary.kept = records.len();
    info!(
        collected = summary.collected,
        kept = summary.kept,
        "filtering done"
    );

    let output = options.output_path();
    reporter.report(&Stage::Writing(&output));
    match export(&records, &output, options.format, options.columns) {
        Ok(()) => summary.output = Some(output),
        Err(err) => error!("{err:#}"),
    }

    if options.copy {
        reporter.report(&Stage::Copying(&options.copy_dir));
        let report = copy_files(&records, &options.copy_dir, reporter);
        summary.copied = report.copied.len();
        summary.copy_failures = report.failed.len();
    }

    Ok(summary)
}
