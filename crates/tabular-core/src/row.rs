//! Borrowed view of one table row.

use crate::error::{FrameError, Result};
use crate::table::Table;
use crate::value::Value;

/// One row of a [`Table`], addressed by its current physical index.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Row<'a> {
    pub(crate) fn new(table: &'a Table, index: usize) -> Self {
        Self { table, index }
    }

    /// Index of the row in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of the column `name`.
    pub fn cell(&self, name: &str) -> Result<&'a Value> {
        let position = self
            .table
            .schema()
            .position(name)
            .ok_or_else(|| FrameError::column_not_found(name))?;
        Ok(&self.values()[position])
    }

    /// All values of the row, in column order.
    pub fn values(&self) -> &'a [Value] {
        &self.table.rows[self.index]
    }
}
