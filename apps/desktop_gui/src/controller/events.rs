//! UI/backend events and error modeling for the desktop controller.

use shared::{domain::Dataset, error::FileParseError};

pub enum UiEvent {
    DatasetReady(Dataset),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    FileRead,
    FileFormat,
    Selection,
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::FileRead => "File access",
        UiErrorCategory::FileFormat => "File format",
        UiErrorCategory::Selection => "Selection",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn from_parse_error(err: &FileParseError) -> Self {
        let category = match err {
            FileParseError::NoSelection => UiErrorCategory::Selection,
            FileParseError::Csv(_) if err.is_read_failure() => UiErrorCategory::FileRead,
            FileParseError::Csv(_)
            | FileParseError::ColumnCount { .. }
            | FileParseError::NotNumeric { .. } => UiErrorCategory::FileFormat,
        };

        Self {
            category,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
