// src/core/export/markdown.rs
use super::row_fields;
use crate::models::{Columns, FileRecord};

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S]) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&cell.as_ref().replace('|', "\\|"));
        out.push_str(" |");
    }
    out.push('\n');
}

/// A pipe table with a dashed separator row under the header.
#[inline]
#[must_use]
pub fn render(records: &[FileRecord], columns: Columns) -> String {
    let headers = columns.headers();
    let mut out = String::new();
    push_row(&mut out, headers);
    push_row(&mut out, vec!["---"; headers.len()].as_slice());
    for record in records {
        push_row(&mut out, row_fields(record, columns).as_slice());
    }
    out
}
