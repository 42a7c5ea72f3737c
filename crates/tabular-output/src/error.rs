//! Error types for table export.

use std::path::PathBuf;

use tabular_core::FrameError;
use thiserror::Error;

/// Errors that can occur while writing a table as CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    // === Configuration Errors ===
    /// The column selection is present but empty.
    #[error("in csv config, the columns list is empty")]
    EmptyColumns,

    /// The column selection names a column the table does not have.
    #[error("in csv config, column {name} not found")]
    ColumnNotFound { name: String },

    // === Table Errors ===
    /// The row range or a cell lookup failed.
    #[error(transparent)]
    Frame(#[from] FrameError),

    // === Write Errors ===
    /// The CSV encoder failed.
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Create a ColumnNotFound error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }
}

/// An export error annotated with the file being written.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("error exporting the {} file: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: ExportError,
    },
}

impl OutputError {
    pub fn file(path: impl Into<PathBuf>, source: impl Into<ExportError>) -> Self {
        Self::File {
            path: path.into(),
            source: source.into(),
        }
    }

    /// The error that stopped the export.
    pub fn export_error(&self) -> &ExportError {
        match self {
            Self::File { source, .. } => source,
        }
    }
}
