//! Forward cursor over a table row range.

use std::iter::FusedIterator;

use crate::row::Row;
use crate::table::Table;

/// Cursor over rows `min..max` of a table.
///
/// `position` is the table index of the row the cursor points at; `index`
/// counts rows yielded so far. Once exhausted, every further call to `next`
/// returns `None` until [`RowIter::reset`].
#[derive(Debug, Clone)]
pub struct RowIter<'a> {
    table: &'a Table,
    min: usize,
    max: usize,
    position: usize,
    index: usize,
}

impl<'a> RowIter<'a> {
    /// Bounds must already be validated against the table.
    pub(crate) fn over(table: &'a Table, min: usize, max: usize) -> Self {
        Self {
            table,
            min,
            max,
            position: min,
            index: 0,
        }
    }

    /// The row the next call to `next` yields, without advancing.
    pub fn current(&self) -> Option<Row<'a>> {
        (self.position < self.max).then(|| Row::new(self.table, self.position))
    }

    /// Rewind to the start of the range.
    pub fn reset(&mut self) {
        self.position = self.min;
        self.index = 0;
    }

    /// Table index the cursor points at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of rows yielded since creation or the last reset.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The `min..max` bounds of the range.
    pub fn bounds(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    fn remaining(&self) -> usize {
        self.max.saturating_sub(self.position)
    }
}

impl<'a> Iterator for RowIter<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        let row = self.current()?;
        self.position += 1;
        self.index += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowIter<'_> {}

impl FusedIterator for RowIter<'_> {}

#[cfg(test)]
mod tests {
    use crate::column::{Column, ColumnType};
    use crate::schema::Schema;
    use crate::table::Table;
    use crate::value::Value;

    fn table(rows: i64) -> Table {
        let schema =
            Schema::new(vec![Column::new("n", ColumnType::Int, 0, true)]).expect("schema");
        let rows = (0..rows).map(|n| vec![Value::from(n)]).collect();
        Table::new(schema, rows).expect("table")
    }

    #[test]
    fn test_yields_range_then_stays_exhausted() {
        let table = table(5);
        let mut rows = table.iterator_range(1, 3).expect("range");
        assert_eq!(rows.position(), 1);
        assert_eq!(rows.index(), 0);

        let first = rows.next().expect("row 1");
        assert_eq!(first.index(), 1);
        assert_eq!(rows.position(), 2);
        assert_eq!(rows.index(), 1);

        assert_eq!(rows.next().map(|row| row.index()), Some(2));
        assert!(rows.next().is_none());
        assert!(rows.next().is_none());
        assert_eq!(rows.position(), 3);
        assert_eq!(rows.index(), 2);
    }

    #[test]
    fn test_current_peeks_without_advancing() {
        let table = table(5);
        let mut rows = table.iterator_range(2, 4).expect("range");
        assert_eq!(rows.current().map(|row| row.index()), Some(2));
        assert_eq!(rows.current().map(|row| row.index()), Some(2));
        assert_eq!(rows.position(), 2);

        rows.next();
        assert_eq!(rows.current().map(|row| row.index()), Some(3));
        assert_eq!(rows.position(), 3);
        assert_eq!(rows.index(), 1);

        rows.next();
        assert!(rows.current().is_none());
    }

    #[test]
    fn test_reset_rewinds() {
        let table = table(3);
        let mut rows = table.iter();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.by_ref().count(), 3);
        rows.reset();
        assert_eq!(rows.position(), 0);
        assert_eq!(rows.index(), 0);
        assert_eq!(rows.next().map(|row| row.index()), Some(0));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_empty_range_yields_nothing() {
        let table = table(4);
        let mut rows = table.iterator_range(4, 4).expect("range");
        assert!(rows.current().is_none());
        assert!(rows.next().is_none());
        assert_eq!(rows.bounds(), (4, 4));
    }
}
