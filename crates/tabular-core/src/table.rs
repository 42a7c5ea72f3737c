//! The table façade: schema, row storage and committed order.

use num_complex::Complex64;

use crate::column::Column;
use crate::error::{FrameError, Result};
use crate::iterator::RowIter;
use crate::order::SortKey;
use crate::schema::Schema;
use crate::value::{NativeType, Value};

/// An in-memory table of typed columns.
///
/// Rows are stored densely, one [`Value`] per column in schema order.
/// Sorting permutes the stored rows; row indices always refer to the current
/// physical order.
#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) schema: Schema,
    pub(crate) rows: Vec<Vec<Value>>,
    pub(crate) order: Vec<SortKey>,
}

impl Table {
    /// Create a table from a schema and its rows.
    ///
    /// Every row must hold exactly one value per column, each belonging to
    /// its column's type.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Result<Self> {
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != schema.len() {
                return Err(FrameError::RowLength {
                    row: row_index,
                    expected: schema.len(),
                    actual: row.len(),
                });
            }
            for (column, value) in schema.columns().iter().zip(row) {
                if value.column_type() != column.column_type() {
                    return Err(FrameError::CellType {
                        row: row_index,
                        column: column.name().to_string(),
                        expected: column.column_type(),
                        actual: value.column_type(),
                    });
                }
            }
        }

        tracing::debug!(rows = rows.len(), columns = schema.len(), "Built table");

        Ok(Self {
            schema,
            rows,
            order: Vec::new(),
        })
    }

    /// Create a table with no rows.
    pub fn empty(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows.
    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    /// Column names in declaration order.
    pub fn headers(&self) -> Vec<String> {
        self.schema.headers()
    }

    /// Column descriptors in declaration order.
    pub fn columns(&self) -> &[Column] {
        self.schema.columns()
    }

    /// Descriptor of the column named `name`.
    pub fn column_info(&self, name: &str) -> Option<&Column> {
        self.schema.column(name)
    }

    /// Validates a closed-open row range and returns it as indices.
    pub fn check_range(&self, min: isize, max: isize) -> Result<(usize, usize)> {
        if min < 0 || max < 0 {
            return Err(FrameError::NegativeIndex { min, max });
        }
        if min > max {
            return Err(FrameError::MaxLessThanMin { min, max });
        }

        let rows = self.number_of_rows();
        let (lo, hi) = (min.unsigned_abs(), max.unsigned_abs());
        if lo > rows || hi > rows {
            return Err(FrameError::IndexOutOfRange { min, max, rows });
        }
        Ok((lo, hi))
    }

    /// The whole table as a row range, in the signed form range methods take.
    pub(crate) fn full_range(&self) -> (isize, isize) {
        (0, isize::try_from(self.number_of_rows()).unwrap_or(isize::MAX))
    }

    /// Iterator over all rows.
    pub fn iter(&self) -> RowIter<'_> {
        RowIter::over(self, 0, self.number_of_rows())
    }

    /// Iterator over rows `min..max`.
    pub fn iterator_range(&self, min: isize, max: isize) -> Result<RowIter<'_>> {
        let (min, max) = self.check_range(min, max)?;
        Ok(RowIter::over(self, min, max))
    }

    /// Value of `column` in row `row`.
    pub fn get(&self, row: usize, column: &str) -> Result<&Value> {
        let values = self
            .rows
            .get(row)
            .ok_or(FrameError::RowOutOfRange { index: row })?;
        let position = self
            .schema
            .position(column)
            .ok_or_else(|| FrameError::column_not_found(column))?;
        Ok(&values[position])
    }

    // === Column extraction ===

    /// All values of the column `name`.
    pub fn column(&self, name: &str) -> Result<Vec<Value>> {
        let (min, max) = self.full_range();
        self.column_range(name, min, max)
    }

    /// Values of the column `name` in rows `min..max`.
    pub fn column_range(&self, name: &str, min: isize, max: isize) -> Result<Vec<Value>> {
        let position = self
            .schema
            .position(name)
            .ok_or_else(|| FrameError::column_not_found(name))?;
        let rows = self.iterator_range(min, max)?;
        Ok(rows.map(|row| row.values()[position].clone()).collect())
    }

    /// Native values of a column whose type matches `N`.
    fn column_native<N: NativeType>(
        &self,
        name: &str,
        min: isize,
        max: isize,
    ) -> Result<Vec<N>> {
        let column = self
            .column_info(name)
            .ok_or_else(|| FrameError::column_not_found(name))?;
        if column.column_type() != N::COLUMN_TYPE {
            return Err(FrameError::type_mismatch(N::COLUMN_TYPE, column.column_type()));
        }
        let position = self.schema.position(name).unwrap_or_default();
        self.iterator_range(min, max)?
            .map(|row| row.values()[position].handle::<N>().map(|handle| handle.native()))
            .collect()
    }

    pub fn column_as_int(&self, name: &str) -> Result<Vec<i64>> {
        let (min, max) = self.full_range();
        self.column_native(name, min, max)
    }

    pub fn column_as_int_range(&self, name: &str, min: isize, max: isize) -> Result<Vec<i64>> {
        self.column_native(name, min, max)
    }

    pub fn column_as_uint(&self, name: &str) -> Result<Vec<u64>> {
        let (min, max) = self.full_range();
        self.column_native(name, min, max)
    }

    pub fn column_as_uint_range(&self, name: &str, min: isize, max: isize) -> Result<Vec<u64>> {
        self.column_native(name, min, max)
    }

    pub fn column_as_float(&self, name: &str) -> Result<Vec<f64>> {
        let (min, max) = self.full_range();
        self.column_native(name, min, max)
    }

    pub fn column_as_float_range(&self, name: &str, min: isize, max: isize) -> Result<Vec<f64>> {
        self.column_native(name, min, max)
    }

    pub fn column_as_complex(&self, name: &str) -> Result<Vec<Complex64>> {
        let (min, max) = self.full_range();
        self.column_native(name, min, max)
    }

    pub fn column_as_complex_range(
        &self,
        name: &str,
        min: isize,
        max: isize,
    ) -> Result<Vec<Complex64>> {
        self.column_native(name, min, max)
    }

    pub fn column_as_string(&self, name: &str) -> Result<Vec<String>> {
        let (min, max) = self.full_range();
        self.column_native(name, min, max)
    }

    pub fn column_as_string_range(
        &self,
        name: &str,
        min: isize,
        max: isize,
    ) -> Result<Vec<String>> {
        self.column_native(name, min, max)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = crate::row::Row<'a>;
    type IntoIter = RowIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::FieldKind;
    use crate::schema::Field;

    fn two_columns() -> Schema {
        Schema::from_fields(&[
            Field::new("A", FieldKind::of::<i64>()).column("a"),
            Field::new("B", FieldKind::of::<String>()).column("b"),
        ])
        .expect("schema")
    }

    #[test]
    fn test_rows_must_match_the_schema() {
        let err = Table::new(two_columns(), vec![vec![Value::from(1_i64)]]).unwrap_err();
        assert_eq!(
            err,
            FrameError::RowLength {
                row: 0,
                expected: 2,
                actual: 1
            }
        );

        let err = Table::new(
            two_columns(),
            vec![vec![Value::from(1_i64), Value::from(2_i64)]],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "row 0, column b: value type is int, expected string"
        );
    }

    #[test]
    fn test_get_checks_row_then_column() {
        let table = Table::new(
            two_columns(),
            vec![vec![Value::from(1_i64), Value::from("x")]],
        )
        .expect("table");

        assert_eq!(table.get(0, "b").map(ToString::to_string), Ok("x".to_string()));
        assert_eq!(
            table.get(1, "b").unwrap_err().to_string(),
            "row 1 out of range"
        );
        assert_eq!(
            table.get(0, "z").unwrap_err().to_string(),
            "column z not found"
        );
    }

    #[test]
    fn test_check_range_rules() {
        let table = Table::empty(two_columns());
        assert_eq!(table.check_range(0, 0), Ok((0, 0)));
        assert!(matches!(
            table.check_range(0, 1),
            Err(FrameError::IndexOutOfRange { rows: 0, .. })
        ));
        assert!(matches!(
            table.check_range(-1, 0),
            Err(FrameError::NegativeIndex { .. })
        ));
    }
}
