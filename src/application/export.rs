//! Tabular export of API records
//!
//! Records are flattened one level: every top-level key becomes a column,
//! nested objects and arrays are written as compact JSON.

use crate::error::AppError;
use prettytable::csv::Writer;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Column names for a set of records, sorted
#[must_use]
pub fn record_columns(records: &[Value]) -> Vec<String> {
    let columns: BTreeSet<&String> = records
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|obj| obj.keys())
        .collect();
    columns.into_iter().cloned().collect()
}

/// Text of one cell
#[must_use]
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Writes records as CSV to any writer
///
/// Writes a header row, then one row per record. Cell text is written
/// byte for byte, so embedded line breaks survive quoting.
///
/// # Returns
/// The number of data rows written. Records without any keys produce no output.
pub fn write_records_csv<W: Write>(records: &[Value], writer: W) -> Result<usize, AppError> {
    let columns = record_columns(records);
    if columns.is_empty() {
        return Ok(0);
    }

    let mut csv = Writer::from_writer(writer);
    csv.write_record(&columns).map_err(export_error)?;
    for record in records {
        csv.write_record(columns.iter().map(|column| cell_text(record.get(column))))
            .map_err(export_error)?;
    }
    csv.flush()?;
    Ok(records.len())
}

fn export_error(e: impl std::fmt::Display) -> AppError {
    AppError::Export(e.to_string())
}

/// Writes records as CSV to `path`, creating or truncating the file
pub fn export_records_csv<P: AsRef<Path>>(records: &[Value], path: P) -> Result<usize, AppError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let rows = write_records_csv(records, BufWriter::new(file))?;
    info!("Exported {} records to {}", rows, path.display());
    Ok(rows)
}
