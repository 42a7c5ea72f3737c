//! Record ingestion for typed tables.
//!
//! A record type describes its fields through [`Record`]; the fields tagged
//! with a column name become the table schema, in declaration order.
//!
//! # Example
//!
//! ```
//! use tabular_core::{Field, FieldKind, Value};
//! use tabular_ingest::{Record, table_from_records};
//!
//! struct Reading {
//!     station: &'static str,
//!     value: f64,
//! }
//!
//! impl Record for Reading {
//!     fn fields() -> Vec<Field> {
//!         vec![
//!             Field::new("station", FieldKind::of::<String>()).column("station"),
//!             Field::new("value", FieldKind::of::<f64>()).column("value"),
//!         ]
//!     }
//!
//!     fn field_value(&self, index: usize) -> Option<Value> {
//!         match index {
//!             0 => Some(Value::from(self.station)),
//!             1 => Some(Value::from(self.value)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let readings = [
//!     Reading { station: "north", value: 1.5 },
//!     Reading { station: "south", value: 2.0 },
//! ];
//! let table = table_from_records(&readings)?;
//! assert_eq!(table.sum("value")?.as_f64(), Some(3.5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === Record Loading ===
pub use records::{Record, schema_of, table_from_records};
