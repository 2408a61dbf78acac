use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs::File, path::Path};
use tracing::warn;

use crate::{convert::ConvertedFile, tables::Table};

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct VerifySummary {
    pub records: usize,
    pub field_mismatches: usize,
}

/// One row of the summary printed after a run.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct TableReport {
    pub file: String,
    pub table: Option<Table>,
    pub lines: usize,
    pub short_lines: usize,
    pub records: usize,
    pub expected_fields: Option<usize>,
    pub field_mismatches: usize,
}

/// Reads a converted file back as CSV and counts the records whose field
/// count is not `expected_fields`. Fields are taken literally: a comma inside
/// a free-text column yields an extra field.
pub fn verify_file<P: AsRef<Path>>(
    path: P,
    expected_fields: Option<usize>,
) -> Result<VerifySummary> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening `{}`", path.display()))?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(file);

    let mut summary = VerifySummary::default();
    for record in rdr.records() {
        let record = record.with_context(|| format!("reading `{}`", path.display()))?;
        summary.records += 1;
        if let Some(expected) = expected_fields {
            if record.len() != expected {
                summary.field_mismatches += 1;
            }
        }
    }

    if summary.field_mismatches > 0 {
        warn!(
            "{}: {} of {} record(s) do not have {} fields",
            path.display(),
            summary.field_mismatches,
            summary.records,
            expected_fields.unwrap_or_default()
        );
    }

    Ok(summary)
}

pub fn report(converted: &ConvertedFile) -> Result<TableReport> {
    let table = Table::from_file_name(&converted.file_name);
    let expected_fields = table.map(Table::column_count);
    let summary = verify_file(&converted.path, expected_fields)?;

    Ok(TableReport {
        file: converted.file_name.clone(),
        table,
        lines: converted.stats.lines,
        short_lines: converted.stats.short_lines,
        records: summary.records,
        expected_fields,
        field_mismatches: summary.field_mismatches,
    })
}
