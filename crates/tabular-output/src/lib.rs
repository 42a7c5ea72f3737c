//! CSV export for typed tables.
//!
//! Writes a header record followed by one record per row, rendering every
//! cell with its value's `Display`. Defaults: `;` delimiter, `\n`
//! terminators, every column, every row.
//!
//! # Example
//!
//! ```
//! use tabular_core::{Field, FieldKind, Schema, Table, Value};
//! use tabular_output::{CsvOptions, write_csv};
//!
//! let schema = Schema::from_fields(&[
//!     Field::new("station", FieldKind::of::<String>()).column("station"),
//!     Field::new("temp", FieldKind::of::<i64>()).column("temp"),
//! ])?;
//! let table = Table::new(
//!     schema,
//!     vec![
//!         vec![Value::from("north"), Value::from(12_i64)],
//!         vec![Value::from("south"), Value::from(17_i64)],
//!     ],
//! )?;
//!
//! let options = CsvOptions::new()
//!     .with_delimiter(b',')
//!     .with_columns(["temp"])
//!     .with_range(1, 2);
//! let mut out = Vec::new();
//! write_csv(&mut out, &table, &options)?;
//! assert_eq!(String::from_utf8(out)?, "temp\n17\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod options;
mod writer;

// === Error Types ===
pub use error::{ExportError, OutputError, Result};

// === Options ===
pub use options::{CsvOptions, RowRange};

// === Writing ===
pub use writer::{CsvExporter, export_csv_file, export_csv_file_default, write_csv};
