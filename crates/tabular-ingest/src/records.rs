//! Loading a slice of records into a table.

use tabular_core::{Field, Schema, Table, Value};

use crate::error::{IngestError, Result};

/// A record type whose fields can be exposed as table columns.
///
/// `fields` lists every field in declaration order; only fields tagged with
/// a column name become columns. `field_value` returns the value of the field
/// at a position of that list.
///
/// ```
/// use tabular_core::{Field, FieldKind, Value};
/// use tabular_ingest::{Record, table_from_records};
///
/// struct Person {
///     name: String,
///     age: u8,
///     secret: bool,
/// }
///
/// impl Record for Person {
///     fn fields() -> Vec<Field> {
///         vec![
///             Field::new("name", FieldKind::of::<String>()).column("name"),
///             Field::new("age", FieldKind::of::<u8>()).column("age"),
///             Field::new("secret", FieldKind::of::<bool>()).private(),
///         ]
///     }
///
///     fn field_value(&self, index: usize) -> Option<Value> {
///         match index {
///             0 => Some(Value::from(self.name.as_str())),
///             1 => Some(Value::from(self.age)),
///             _ => None,
///         }
///     }
/// }
///
/// let people = [Person { name: "Ada".into(), age: 36, secret: true }];
/// let table = table_from_records(&people)?;
/// assert_eq!(table.headers(), ["name", "age"]);
/// assert_eq!(table.column_as_uint("age")?, [36]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Record {
    /// Field declarations of the record type.
    fn fields() -> Vec<Field>;

    /// Value of the field at `index` of [`Record::fields`].
    fn field_value(&self, index: usize) -> Option<Value>;
}

/// Derive the schema of a record type.
pub fn schema_of<R: Record>() -> Result<Schema> {
    Ok(Schema::from_fields(&R::fields())?)
}

/// Load records into a new table, one row per record.
///
/// The schema is derived from `R` even when `records` is empty.
pub fn table_from_records<R: Record>(records: &[R]) -> Result<Table> {
    let schema = schema_of::<R>()?;

    let mut rows = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let mut values = Vec::with_capacity(schema.len());
        for column in schema.columns() {
            let value = record
                .field_value(column.index())
                .ok_or_else(|| IngestError::missing_value(column.name(), row))?;
            if value.column_type() != column.column_type() {
                return Err(IngestError::ValueMismatch {
                    column: column.name().to_string(),
                    row,
                    expected: column.column_type(),
                    actual: value.column_type(),
                });
            }
            values.push(value);
        }
        rows.push(values);
    }

    let table = Table::new(schema, rows)?;
    tracing::debug!(
        record_type = std::any::type_name::<R>(),
        rows = table.number_of_rows(),
        columns = table.columns().len(),
        "Ingested records"
    );
    Ok(table)
}
