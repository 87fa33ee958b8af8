// src/core/export.rs
mod csv;
mod markdown;

pub use csv::render as render_csv;
pub use markdown::render as render_markdown;

use crate::models::{Columns, FileRecord, OutputFormat};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Field values of one record, in header order.
fn row_fields(record: &FileRecord, columns: Columns) -> Vec<String> {
    let mut fields = vec![record.filename.clone(), record.path_str().into_owned()];
    if columns == Columns::Full {
        fields.push(record.size.map(|size| size.to_string()).unwrap_or_default());
        fields.push(record.formatted_modified().unwrap_or_default());
    }
    fields
}

/// Renders the records in the requested format.
#[inline]
#[must_use]
pub fn render(records: &[FileRecord], format: OutputFormat, columns: Columns) -> String {
    match format {
        OutputFormat::Csv => render_csv(records, columns),
        OutputFormat::Markdown => render_markdown(records, columns),
    }
}

/// Renders the records and writes them to `path`, creating or truncating it.
///
/// # Arguments
///
/// * `records` - The final record list
/// * `path` - Destination file, extension included
/// * `format` - CSV or Markdown
/// * `columns` - Whether size and modification time are written
///
/// # Errors
///
/// This function may return an error if:
/// * The destination cannot be created or written
#[inline]
pub fn export(
    records: &[FileRecord],
    path: &Path,
    format: OutputFormat,
    columns: Columns,
) -> Result<()> {
    let content = render(records, format, columns);
    fs::write(path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
