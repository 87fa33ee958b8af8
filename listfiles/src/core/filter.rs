// src/core/filter.rs
use crate::models::{FileRecord, FilterRule};
use crate::utils::{ProgressReporter, Stage};
use anyhow::{Context as _, Result};
use regex::Regex;

/// Compiles the pattern of a rule.
///
/// # Errors
///
/// Returns an error if the pattern is not a valid regular expression.
#[inline]
pub fn compile_rule(rule: &FilterRule) -> Result<Regex> {
    Regex::new(&rule.pattern)
        .with_context(|| format!("Invalid filter pattern: {}", rule.pattern))
}

/// Keeps the records whose path match equals `rule.keep`.
///
/// Relative order is preserved and no record is added or duplicated.
///
/// # Arguments
///
/// * `records` - The working set produced by the previous stage
/// * `rule` - The rule to apply
///
/// # Returns
///
/// * `Ok(Vec<FileRecord>)` - The surviving records, possibly empty
///
/// # Errors
///
/// This function may return an error if:
/// * The rule's pattern is not a valid regular expression
#[inline]
pub fn apply_filter(records: Vec<FileRecord>, rule: &FilterRule) -> Result<Vec<FileRecord>> {
    let regex = compile_rule(rule)?;
    Ok(records
        .into_iter()
        .filter(|record| regex.is_match(&record.path_str()) == rule.keep)
        .collect())
}

/// Applies every rule in order, each one on the output of the previous,
/// reporting [`Stage::Filtering`] before each rule.
///
/// # Errors
///
/// Fails on the first rule with an invalid pattern.
#[inline]
pub fn apply_filters(
    records: Vec<FileRecord>,
    rules: &[FilterRule],
    reporter: &dyn ProgressReporter,
) -> Result<Vec<FileRecord>> {
    rules.iter().try_fold(records, |records, rule| {
        reporter.report(&Stage::Filtering(rule));
        apply_filter(records, rule)
    })
}
