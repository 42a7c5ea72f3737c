//! Table schemas and their derivation from record field declarations.

use std::collections::HashMap;

use crate::column::{Column, FieldKind};
use crate::error::{FrameError, Result};

/// Declaration of one record field.
///
/// Only fields carrying a column tag become columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field identifier inside the record.
    pub ident: String,
    /// Column name, when the field is exposed as a column.
    pub column: Option<String>,
    /// Whether the record exposes the field publicly.
    pub exported: bool,
    /// Declared type of the field.
    pub kind: FieldKind,
}

impl Field {
    /// Create an exported, untagged field.
    pub fn new(ident: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            ident: ident.into(),
            column: None,
            exported: true,
            kind,
        }
    }

    /// Tag the field as the column `name`.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.column = Some(name.into());
        self
    }

    /// Mark the field as private to its record.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

/// Ordered column set with name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
    positions: HashMap<String, usize>,
}

impl Schema {
    /// Create a schema from column descriptors.
    ///
    /// Fails with [`FrameError::DuplicateColumn`] on a repeated name.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if positions.insert(column.name().to_string(), position).is_some() {
                return Err(FrameError::DuplicateColumn {
                    name: column.name().to_string(),
                });
            }
        }
        Ok(Self { columns, positions })
    }

    /// Derive a schema from record fields, in declaration order.
    ///
    /// Untagged fields are skipped. A tagged field must be exported, must not
    /// reuse a column name, and must resolve to a column type.
    pub fn from_fields(fields: &[Field]) -> Result<Self> {
        let mut columns: Vec<Column> = Vec::new();

        for (index, field) in fields.iter().enumerate() {
            let Some(name) = field.column.as_deref() else {
                continue;
            };

            if !field.exported {
                return Err(FrameError::Unexportable {
                    name: name.to_string(),
                });
            }

            if columns.iter().any(|column| column.name() == name) {
                return Err(FrameError::DuplicateColumn {
                    name: name.to_string(),
                });
            }

            let (column_type, basic_type) = field.kind.resolve(name)?;
            columns.push(Column::new(name, column_type, index, basic_type));
        }

        Self::new(columns)
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of the column named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Descriptor of the column named `name`.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|position| &self.columns[position])
    }

    /// Column names in declaration order.
    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.name().to_string())
            .collect()
    }
}
