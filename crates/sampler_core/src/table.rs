//! Single-column numeric file loading for the upload-driven source.

use csv::{ReaderBuilder, Trim};
use shared::{domain::FileSpec, error::FileParseError};
use tracing::debug;

/// Reads the file described by `spec` as one numeric column.
///
/// The header row, when `spec.has_header` is set, is skipped entirely and
/// never validated as a number. Fields are whitespace-trimmed. Records with
/// more than one field and fields that do not parse as `f64` are rejected. A
/// file with no data rows yields an empty column, which the caller renders
/// as a cleared plot.
pub fn read_numeric_column(spec: &FileSpec) -> Result<Vec<f64>, FileParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(spec.has_header)
        .trim(Trim::All)
        .flexible(true)
        .from_path(&spec.path)?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() != 1 {
            return Err(FileParseError::ColumnCount {
                line,
                found: record.len(),
            });
        }
        let field = &record[0];
        let value: f64 = field.parse().map_err(|_| FileParseError::NotNumeric {
            line,
            value: field.to_string(),
        })?;
        values.push(value);
    }

    debug!(
        path = %spec.path.display(),
        rows = values.len(),
        header = spec.has_header,
        "parsed numeric column"
    );
    Ok(values)
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
