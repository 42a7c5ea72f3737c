//! Row visitors and the numeric aggregates built on them.

use std::cmp::Ordering;
use std::fmt;

use num_complex::Complex64;

use crate::column::ColumnType;
use crate::error::{FrameError, Result};
use crate::row::Row;
use crate::table::Table;
use crate::value::{NativeType, format_complex, format_float};

/// A visitor run once per row of a range.
///
/// The first error stops the run and is returned unchanged.
pub trait Operation {
    fn visit(&mut self, row: &Row<'_>) -> Result<()>;
}

impl<F> Operation for F
where
    F: FnMut(&Row<'_>) -> Result<()>,
{
    fn visit(&mut self, row: &Row<'_>) -> Result<()> {
        self(row)
    }
}

/// Native types of the numeric column families.
pub trait Numeric: NativeType + Copy + fmt::Debug {
    /// Start value of a sum.
    const ZERO: Self;
    /// Start value of a maximum.
    const LOWEST: Self;
    /// Start value of a minimum.
    const HIGHEST: Self;

    /// Adds two values. Integer families wrap on overflow.
    fn accumulate(self, other: Self) -> Self;

    fn into_aggregate(self) -> Aggregate;
}

impl Numeric for i64 {
    const ZERO: Self = 0;
    const LOWEST: Self = i64::MIN;
    const HIGHEST: Self = i64::MAX;

    fn accumulate(self, other: Self) -> Self {
        self.wrapping_add(other)
    }

    fn into_aggregate(self) -> Aggregate {
        Aggregate::Int(self)
    }
}

impl Numeric for u64 {
    const ZERO: Self = 0;
    const LOWEST: Self = 0;
    const HIGHEST: Self = u64::MAX;

    fn accumulate(self, other: Self) -> Self {
        self.wrapping_add(other)
    }

    fn into_aggregate(self) -> Aggregate {
        Aggregate::Uint(self)
    }
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const LOWEST: Self = f64::MIN;
    const HIGHEST: Self = f64::MAX;

    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    fn into_aggregate(self) -> Aggregate {
        Aggregate::Float(self)
    }
}

impl Numeric for Complex64 {
    const ZERO: Self = Complex64 { re: 0.0, im: 0.0 };
    const LOWEST: Self = Complex64 {
        re: f64::MIN,
        im: f64::MIN,
    };
    const HIGHEST: Self = Complex64 {
        re: f64::MAX,
        im: f64::MAX,
    };

    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    fn into_aggregate(self) -> Aggregate {
        Aggregate::Complex(self)
    }
}

/// Result of an aggregate, typed by the column family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregate {
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(Complex64),
}

impl Aggregate {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Aggregate::Int(_) => ColumnType::Int,
            Aggregate::Uint(_) => ColumnType::Uint,
            Aggregate::Float(_) => ColumnType::Float,
            Aggregate::Complex(_) => ColumnType::Complex,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Aggregate::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Aggregate::Uint(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Aggregate::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            Aggregate::Complex(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregate::Int(value) => write!(f, "{value}"),
            Aggregate::Uint(value) => write!(f, "{value}"),
            Aggregate::Float(value) => f.write_str(&format_float(*value)),
            Aggregate::Complex(value) => f.write_str(&format_complex(*value)),
        }
    }
}

/// Running sum of one column.
#[derive(Debug, Clone)]
pub struct Sum<N> {
    column: String,
    total: N,
}

impl<N: Numeric> Sum<N> {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            total: N::ZERO,
        }
    }

    pub fn total(&self) -> N {
        self.total
    }
}

impl<N: Numeric> Operation for Sum<N> {
    fn visit(&mut self, row: &Row<'_>) -> Result<()> {
        let value = row.cell(&self.column)?.handle::<N>()?.native();
        self.total = self.total.accumulate(value);
        Ok(())
    }
}

/// Running minimum or maximum of one column.
///
/// Starts from the extreme seed of the family, so an empty range yields the
/// seed itself.
#[derive(Debug, Clone)]
pub struct Extremum<N> {
    column: String,
    target: Ordering,
    current: N,
}

impl<N: Numeric> Extremum<N> {
    pub fn min(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            target: Ordering::Less,
            current: N::HIGHEST,
        }
    }

    pub fn max(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            target: Ordering::Greater,
            current: N::LOWEST,
        }
    }

    pub fn value(&self) -> N {
        self.current
    }
}

impl<N: Numeric> Operation for Extremum<N> {
    fn visit(&mut self, row: &Row<'_>) -> Result<()> {
        let payload = row.cell(&self.column)?.handle::<N>()?;
        if payload.compare(&self.current) == self.target {
            self.current = payload.native();
        }
        Ok(())
    }
}

impl Table {
    /// Run `operation` over every row.
    pub fn run_operation<O: Operation + ?Sized>(&self, operation: &mut O) -> Result<()> {
        let (min, max) = self.full_range();
        self.run_operation_range(operation, min, max)
    }

    /// Run `operation` over rows `min..max`, stopping at the first error.
    pub fn run_operation_range<O: Operation + ?Sized>(
        &self,
        operation: &mut O,
        min: isize,
        max: isize,
    ) -> Result<()> {
        for row in self.iterator_range(min, max)? {
            operation.visit(&row)?;
        }
        Ok(())
    }

    fn numeric_column(&self, operation: &'static str, column: &str) -> Result<ColumnType> {
        let info = self
            .column_info(column)
            .ok_or_else(|| FrameError::column_not_found(column))?;
        match info.column_type() {
            ColumnType::String => Err(FrameError::invalid_operation(
                operation,
                column,
                ColumnType::String,
            )),
            column_type => Ok(column_type),
        }
    }

    fn run_sum<N: Numeric>(&self, column: &str, min: isize, max: isize) -> Result<Aggregate> {
        let mut sum = Sum::<N>::new(column);
        self.run_operation_range(&mut sum, min, max)?;
        Ok(sum.total().into_aggregate())
    }

    fn run_extremum<N: Numeric>(
        &self,
        mut extremum: Extremum<N>,
        min: isize,
        max: isize,
    ) -> Result<Aggregate> {
        self.run_operation_range(&mut extremum, min, max)?;
        Ok(extremum.value().into_aggregate())
    }

    /// Sum of a numeric column.
    pub fn sum(&self, column: &str) -> Result<Aggregate> {
        let (min, max) = self.full_range();
        self.sum_range(column, min, max)
    }

    /// Sum of a numeric column over rows `min..max`.
    pub fn sum_range(&self, column: &str, min: isize, max: isize) -> Result<Aggregate> {
        match self.numeric_column("Sum", column)? {
            ColumnType::Int => self.run_sum::<i64>(column, min, max),
            ColumnType::Uint => self.run_sum::<u64>(column, min, max),
            ColumnType::Float => self.run_sum::<f64>(column, min, max),
            ColumnType::Complex => self.run_sum::<Complex64>(column, min, max),
            ColumnType::String => Err(FrameError::invalid_operation(
                "Sum",
                column,
                ColumnType::String,
            )),
        }
    }

    /// Minimum of a numeric column.
    pub fn min(&self, column: &str) -> Result<Aggregate> {
        let (min, max) = self.full_range();
        self.min_range(column, min, max)
    }

    /// Minimum of a numeric column over rows `min..max`.
    pub fn min_range(&self, column: &str, min: isize, max: isize) -> Result<Aggregate> {
        self.extremum("Min", Ordering::Less, column, min, max)
    }

    /// Maximum of a numeric column.
    pub fn max(&self, column: &str) -> Result<Aggregate> {
        let (min, max) = self.full_range();
        self.max_range(column, min, max)
    }

    /// Maximum of a numeric column over rows `min..max`.
    pub fn max_range(&self, column: &str, min: isize, max: isize) -> Result<Aggregate> {
        self.extremum("Max", Ordering::Greater, column, min, max)
    }

    fn extremum(
        &self,
        operation: &'static str,
        target: Ordering,
        column: &str,
        min: isize,
        max: isize,
    ) -> Result<Aggregate> {
        fn seeded<N: Numeric>(column: &str, target: Ordering) -> Extremum<N> {
            if target == Ordering::Less {
                Extremum::min(column)
            } else {
                Extremum::max(column)
            }
        }

        match self.numeric_column(operation, column)? {
            ColumnType::Int => self.run_extremum(seeded::<i64>(column, target), min, max),
            ColumnType::Uint => self.run_extremum(seeded::<u64>(column, target), min, max),
            ColumnType::Float => self.run_extremum(seeded::<f64>(column, target), min, max),
            ColumnType::Complex => {
                self.run_extremum(seeded::<Complex64>(column, target), min, max)
            }
            ColumnType::String => Err(FrameError::invalid_operation(
                operation,
                column,
                ColumnType::String,
            )),
        }
    }
}
