//! Multi-column row ordering.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::ColumnType;
use crate::error::{FrameError, Result};
use crate::schema::Schema;
use crate::table::Table;
use crate::value::{NativeType, Value};

/// Sort direction of an order column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Applies the direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        f.write_str(text)
    }
}

/// One key of a table order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderColumn {
    pub name: String,
    #[serde(default)]
    pub direction: Direction,
}

impl OrderColumn {
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    /// Ascending key on `name`.
    pub fn asc(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Ascending)
    }

    /// Descending key on `name`.
    pub fn desc(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Descending)
    }
}

type Comparator = fn(&Value, &Value) -> Ordering;

/// A resolved order key: the column position and the comparator of its type.
#[derive(Debug, Clone)]
pub(crate) struct SortKey {
    column: OrderColumn,
    position: usize,
    compare: Comparator,
}

impl SortKey {
    fn resolve(schema: &Schema, column: &OrderColumn) -> Result<Self> {
        let info = schema
            .column(&column.name)
            .ok_or_else(|| FrameError::column_not_exists(&column.name))?;
        let position = schema.position(&column.name).unwrap_or_default();
        Ok(Self {
            column: column.clone(),
            position,
            compare: comparator(info.column_type()),
        })
    }
}

/// Compares two cells of a column of family `N`.
///
/// `Table::new` rejects cells of another family, so a mismatch is a bug; it
/// trips a debug assertion and otherwise orders by column type.
fn compare_family<N: NativeType>(left: &Value, right: &Value) -> Ordering {
    match (left.handle::<N>(), right.handle::<N>()) {
        (Ok(a), Ok(b)) => a.compare(&b.native()),
        _ => {
            debug_assert!(
                false,
                "mixed {} and {} cells in a {} column",
                left.column_type(),
                right.column_type(),
                N::COLUMN_TYPE
            );
            left.column_type().cmp(&right.column_type())
        }
    }
}

fn comparator(column_type: ColumnType) -> Comparator {
    match column_type {
        ColumnType::Int => compare_family::<i64>,
        ColumnType::Uint => compare_family::<u64>,
        ColumnType::Float => compare_family::<f64>,
        ColumnType::Complex => compare_family::<num_complex::Complex64>,
        ColumnType::String => compare_family::<String>,
    }
}

/// First non-equal key decides; all keys equal means equal.
fn compare_rows(keys: &[SortKey], a: &[Value], b: &[Value]) -> Ordering {
    for key in keys {
        let ordering = (key.compare)(&a[key.position], &b[key.position]);
        if ordering != Ordering::Equal {
            return key.column.direction.apply(ordering);
        }
    }
    Ordering::Equal
}

impl Table {
    /// Replace the table order and sort the rows by it.
    ///
    /// Every name must exist; on error the previous order is kept and no row
    /// moves. An empty order clears the current one.
    pub fn set_order(&mut self, order: &[OrderColumn]) -> Result<()> {
        let keys = order
            .iter()
            .map(|column| SortKey::resolve(&self.schema, column))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|error| tracing::warn!(%error, "Rejected table order"))?;

        tracing::debug!(
            keys = ?order.iter().map(|c| format!("{} {}", c.name, c.direction)).collect::<Vec<_>>(),
            rows = self.number_of_rows(),
            "Set table order"
        );

        self.order = keys;
        self.apply_order();
        Ok(())
    }

    /// The committed order.
    pub fn order(&self) -> Vec<OrderColumn> {
        self.order.iter().map(|key| key.column.clone()).collect()
    }

    /// Sort the rows by the committed order. Ties keep their relative order.
    pub fn apply_order(&mut self) {
        if self.order.is_empty() {
            return;
        }
        let keys = &self.order;
        self.rows.sort_by(|a, b| compare_rows(keys, a, b));
    }

    /// Whether row `i` sorts strictly before row `j` under the committed order.
    pub fn less(&self, i: usize, j: usize) -> Result<bool> {
        let a = self
            .rows
            .get(i)
            .ok_or(FrameError::RowOutOfRange { index: i })?;
        let b = self
            .rows
            .get(j)
            .ok_or(FrameError::RowOutOfRange { index: j })?;
        Ok(compare_rows(&self.order, a, b) == Ordering::Less)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    fn pairs(rows: &[(i64, u64)]) -> Table {
        let schema = Schema::new(vec![
            Column::new("a", ColumnType::Int, 0, true),
            Column::new("b", ColumnType::Uint, 1, true),
        ])
        .expect("schema");
        let rows = rows
            .iter()
            .map(|&(a, b)| vec![Value::from(a), Value::from(b)])
            .collect();
        Table::new(schema, rows).expect("table")
    }

    fn contents(table: &Table) -> Vec<(i64, u64)> {
        let a = table.column_as_int("a").expect("a");
        let b = table.column_as_uint("b").expect("b");
        a.into_iter().zip(b).collect()
    }

    #[test]
    fn test_unknown_column_keeps_previous_order() {
        let mut table = pairs(&[(2, 1), (1, 2)]);
        table.set_order(&[OrderColumn::asc("a")]).expect("order");
        assert_eq!(contents(&table), [(1, 2), (2, 1)]);

        let err = table
            .set_order(&[OrderColumn::desc("b"), OrderColumn::asc("zz")])
            .unwrap_err();
        assert_eq!(err.to_string(), "the column zz doesn't exist");
        assert_eq!(table.order(), [OrderColumn::asc("a")]);
        assert_eq!(contents(&table), [(1, 2), (2, 1)]);
    }

    #[test]
    fn test_less_follows_keys_and_directions() {
        let mut table = pairs(&[(1, 1), (1, 2), (2, 0)]);
        assert!(!table.less(0, 1).expect("less"));

        table
            .set_order(&[OrderColumn::asc("a"), OrderColumn::desc("b")])
            .expect("order");
        assert_eq!(contents(&table), [(1, 2), (1, 1), (2, 0)]);
        assert!(table.less(0, 1).expect("less"));
        assert!(!table.less(1, 0).expect("less"));
        assert!(table.less(1, 2).expect("less"));
        assert!(!table.less(2, 2).expect("less"));
        assert!(table.less(0, 9).is_err());
    }

    #[test]
    fn test_empty_order_leaves_rows_untouched() {
        let mut table = pairs(&[(3, 0), (1, 0), (2, 0)]);
        table.set_order(&[]).expect("order");
        assert!(table.order().is_empty());
        assert_eq!(contents(&table), [(3, 0), (1, 0), (2, 0)]);
    }

    fn floats(values: &[f64]) -> Table {
        let schema =
            Schema::new(vec![Column::new("x", ColumnType::Float, 0, true)]).expect("schema");
        let rows = values.iter().map(|&v| vec![Value::from(v)]).collect();
        Table::new(schema, rows).expect("table")
    }

    #[test]
    fn test_nan_sorts_last_ascending() {
        let mut values = Vec::new();
        for i in 0..64 {
            values.push(if i % 3 == 0 { f64::NAN } else { f64::from(64 - i) });
        }
        values.extend([f64::INFINITY, -0.0, 0.0, f64::NEG_INFINITY]);
        let mut table = floats(&values);

        table.set_order(&[OrderColumn::asc("x")]).expect("order");
        let sorted = table.column_as_float("x").expect("x");
        let numbers = sorted.iter().take_while(|v| !v.is_nan()).count();
        assert_eq!(numbers, values.iter().filter(|v| !v.is_nan()).count());
        assert!(sorted[numbers..].iter().all(|v| v.is_nan()));
        assert_eq!(sorted[0], f64::NEG_INFINITY);
        assert_eq!(sorted[numbers - 1], f64::INFINITY);

        table.set_order(&[OrderColumn::desc("x")]).expect("order");
        let sorted = table.column_as_float("x").expect("x");
        assert!(sorted[0].is_nan());
    }

    #[test]
    fn test_complex_with_nan_parts_sorts() {
        let schema =
            Schema::new(vec![Column::new("c", ColumnType::Complex, 0, true)]).expect("schema");
        let rows = (0..40)
            .map(|i| {
                let re = if i % 4 == 0 { f64::NAN } else { f64::from(i % 5) };
                let im = if i % 3 == 0 { f64::NAN } else { f64::from(i) };
                vec![Value::from(num_complex::Complex64::new(re, im))]
            })
            .collect();
        let mut table = Table::new(schema, rows).expect("table");

        table.set_order(&[OrderColumn::asc("c")]).expect("order");
        let sorted = table.column_as_complex("c").expect("c");
        assert_eq!(sorted[0].re, 0.0);
        assert!(sorted[sorted.len() - 1].re.is_nan());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "mixed int and string cells")]
    fn test_mixed_families_trip_debug_assertion() {
        compare_family::<i64>(&Value::from(1_i64), &Value::from("a"));
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&OrderColumn::desc("a")).expect("json");
        assert_eq!(json, r#"{"name":"a","direction":"descending"}"#);
        let parsed: OrderColumn = serde_json::from_str(r#"{"name":"b"}"#).expect("parse");
        assert_eq!(parsed, OrderColumn::asc("b"));
    }
}
