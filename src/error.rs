//! Error handling for list-building operations.
//!
//! Schema preconditions, malformed invocations, file-system failures and
//! output serialization failures each get their own variant so callers can
//! tell a missing column apart from a missing folder.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdListError {
    /// A stage needs a column the table does not have.
    #[error("Required column '{column}' not found in table")]
    MissingColumn { column: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("File not found at path: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Folder '{path}' not found")]
    FolderNotFound { path: PathBuf },

    #[error("No files matching '{pattern}' found in '{folder}'")]
    NoMatchingFiles { folder: PathBuf, pattern: String },

    #[error("Failed to write output to {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Invalid match pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl AdListError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn write_failed(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::WriteFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True for schema precondition failures
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }
}

pub type Result<T> = std::result::Result<T, AdListError>;
