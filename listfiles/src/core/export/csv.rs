// src/core/export/csv.rs
use super::row_fields;
use crate::models::{Columns, FileRecord};
use std::borrow::Cow;

const SEPARATOR: &str = ", ";

/// Quotes a field only when it would otherwise break the row.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// `File, Path, Size, Mod.time` followed by one row per record.
#[inline]
#[must_use]
pub fn render(records: &[FileRecord], columns: Columns) -> String {
    let mut out = columns.headers().join(SEPARATOR);
    out.push('\n');
    for record in records {
        let fields = row_fields(record, columns);
        let row: Vec<Cow<'_, str>> = fields.iter().map(|field| escape(field)).collect();
        out.push_str(&row.join(SEPARATOR));
        out.push('\n');
    }
    out
}
