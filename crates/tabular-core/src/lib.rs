//! Typed in-memory tables.
//!
//! A [`Table`] holds rows of [`Value`]s under a [`Schema`] of typed columns.
//! Every value belongs to one of five families (int, uint, float, complex,
//! string), either as a primitive or as a user type implementing
//! [`ValueType`].
//!
//! # Features
//!
//! - **Schema derivation**: build columns from record field declarations
//! - **Row access**: range-checked iterators, cell lookup, column extraction
//! - **Ordering**: stable multi-column sort with per-key direction
//! - **Aggregates**: sum, minimum and maximum over numeric columns
//!
//! # Example
//!
//! ```
//! use tabular_core::{Column, ColumnType, OrderColumn, Schema, Table, Value};
//!
//! let schema = Schema::new(vec![
//!     Column::new("name", ColumnType::String, 0, true),
//!     Column::new("score", ColumnType::Int, 1, true),
//! ])?;
//! let mut table = Table::new(
//!     schema,
//!     vec![
//!         vec![Value::from("b"), Value::from(7_i64)],
//!         vec![Value::from("a"), Value::from(3_i64)],
//!     ],
//! )?;
//!
//! table.set_order(&[OrderColumn::asc("name")])?;
//! assert_eq!(table.column_as_string("name")?, ["a", "b"]);
//! assert_eq!(table.sum("score")?.as_i64(), Some(10));
//! # Ok::<(), tabular_core::FrameError>(())
//! ```

mod column;
mod error;
mod iterator;
mod operation;
mod order;
mod row;
mod schema;
mod table;
mod value;

// === Error Types ===
pub use error::{FrameError, Result};

// === Columns and Schemas ===
pub use column::{Column, ColumnType, FieldKind, PrimitiveField, PrimitiveKind};
pub use schema::{Field, Schema};

// === Values ===
pub use num_complex::{Complex32, Complex64};
pub use value::{
    BasicComplex, BasicFloat, BasicInt, BasicString, BasicUint, ComplexLike, FloatLike, IntLike,
    NativeType, StringLike, UintLike, Value, ValueType, format_complex, format_float,
};

// === Table Access ===
pub use iterator::RowIter;
pub use row::Row;
pub use table::Table;

// === Ordering ===
pub use order::{Direction, OrderColumn};

// === Operations ===
pub use operation::{Aggregate, Extremum, Numeric, Operation, Sum};
