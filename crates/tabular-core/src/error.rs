//! Error types for table construction and access.

use thiserror::Error;

use crate::column::ColumnType;

/// Errors raised by schemas, values and table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    // === Schema Errors ===
    /// A field is tagged as a column but is not exported by its record.
    #[error("the column {name} is unexportable")]
    Unexportable { name: String },

    /// Two fields declare the same column name.
    #[error("the column {name} is duplicated")]
    DuplicateColumn { name: String },

    /// The field is a primitive that has no column type (e.g. `bool`).
    #[error("in column {column}: {kind} type is invalid")]
    InvalidType { column: String, kind: String },

    /// The field is a composite type implementing none of the value families.
    #[error("in column {column}: type {type_name} doesn't implement a value type")]
    NoValueType { column: String, type_name: String },

    /// The field is a composite type implementing several value families.
    #[error("in column {column}: type {type_name} implements more than one value type")]
    AmbiguousValueType { column: String, type_name: String },

    /// A row does not hold one value per column.
    #[error("row {row} has {actual} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell value does not belong to its column's type.
    #[error("row {row}, column {column}: value type is {actual}, expected {expected}")]
    CellType {
        row: usize,
        column: String,
        expected: ColumnType,
        actual: ColumnType,
    },

    // === Lookup Errors ===
    /// The requested column does not exist.
    #[error("column {name} not found")]
    ColumnNotFound { name: String },

    /// An order was declared on a column that does not exist.
    #[error("the column {name} doesn't exist")]
    ColumnNotExists { name: String },

    /// The requested row does not exist.
    #[error("row {index} out of range")]
    RowOutOfRange { index: usize },

    // === Range Errors ===
    /// A range bound is negative.
    #[error("index must be non-negative number")]
    NegativeIndex { min: isize, max: isize },

    /// The range upper bound is below its lower bound.
    #[error("max index < min index")]
    MaxLessThanMin { min: isize, max: isize },

    /// A range bound exceeds the number of rows.
    #[error("index out of range")]
    IndexOutOfRange { min: isize, max: isize, rows: usize },

    // === Type Errors ===
    /// A value accessor was used on a value of another type.
    #[error("value type is not {expected}")]
    TypeMismatch {
        expected: ColumnType,
        actual: ColumnType,
    },

    /// Two values of different types were compared.
    #[error("cannot compare a {left} value with a {right} value")]
    CompareMismatch { left: ColumnType, right: ColumnType },

    /// An aggregate was requested on a column type that does not support it.
    #[error("{operation} operation is invalid in column {column} type {column_type}")]
    InvalidOperationForType {
        operation: &'static str,
        column: String,
        column_type: ColumnType,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, FrameError>;

impl FrameError {
    /// Create a ColumnNotFound error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create a ColumnNotExists error.
    pub fn column_not_exists(name: impl Into<String>) -> Self {
        Self::ColumnNotExists { name: name.into() }
    }

    /// Create a TypeMismatch error.
    pub fn type_mismatch(expected: ColumnType, actual: ColumnType) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Create an InvalidOperationForType error.
    pub fn invalid_operation(
        operation: &'static str,
        column: impl Into<String>,
        column_type: ColumnType,
    ) -> Self {
        Self::InvalidOperationForType {
            operation,
            column: column.into(),
            column_type,
        }
    }

    /// Returns true for errors caused by an invalid row range.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::NegativeIndex { .. } | Self::MaxLessThanMin { .. } | Self::IndexOutOfRange { .. }
        )
    }

    /// Returns true for errors caused by a value or column of the wrong type.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. }
                | Self::CompareMismatch { .. }
                | Self::InvalidOperationForType { .. }
        )
    }

    /// Returns true for errors raised while deriving or validating a schema.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::Unexportable { .. }
                | Self::DuplicateColumn { .. }
                | Self::InvalidType { .. }
                | Self::NoValueType { .. }
                | Self::AmbiguousValueType { .. }
                | Self::RowLength { .. }
                | Self::CellType { .. }
        )
    }
}
