use thiserror::Error;

/// The single recoverable error class: a file upload that cannot be reduced
/// to one numeric column. Surfaced to the UI layer for display; never fatal.
#[derive(Debug, Error)]
pub enum FileParseError {
    #[error("no file is selected for loading")]
    NoSelection,

    #[error("failed to read file: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected one numeric column, found {found} fields")]
    ColumnCount { line: u64, found: usize },

    #[error("line {line}: {value:?} is not numeric")]
    NotNumeric { line: u64, value: String },
}

impl FileParseError {
    /// True when the failure came from the filesystem rather than the file's
    /// contents (missing file, permission problem, broken read).
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Csv(err) if matches!(err.kind(), csv::ErrorKind::Io(_)))
    }
}
