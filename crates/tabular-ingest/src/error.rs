//! Error types for record ingestion.

use tabular_core::{ColumnType, FrameError};
use thiserror::Error;

/// Errors that can occur while loading records into a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// Schema derivation or table validation failed.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// A record returned no value for a column field.
    #[error("record {row} has no value for column {column}")]
    MissingValue { column: String, row: usize },

    /// A record returned a value of another type than its column.
    #[error("record {row}, column {column}: value type is {actual}, expected {expected}")]
    ValueMismatch {
        column: String,
        row: usize,
        expected: ColumnType,
        actual: ColumnType,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// Create a MissingValue error.
    pub fn missing_value(column: impl Into<String>, row: usize) -> Self {
        Self::MissingValue {
            column: column.into(),
            row,
        }
    }

    /// Returns true if the record type itself cannot form a schema.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Frame(error) if error.is_schema_error())
    }
}
