//! Cell values.
//!
//! A [`Value`] holds exactly one payload from one of five families, one per
//! [`ColumnType`]. Each family is the trait object `dyn ValueType<Native = N>`
//! for its native type `N`:
//!
//! | Family | Native |
//! |--------|--------|
//! | [`IntLike`] | `i64` |
//! | [`UintLike`] | `u64` |
//! | [`FloatLike`] | `f64` |
//! | [`ComplexLike`] | `Complex64` |
//! | [`StringLike`] | `String` |
//!
//! Primitives are stored through the `Basic*` wrappers. Custom types join a
//! family by implementing [`ValueType`]:
//!
//! ```
//! use std::cmp::Ordering;
//! use std::fmt;
//! use tabular_core::{ColumnType, Value, ValueType};
//!
//! /// Temperature stored in Celsius, exposed in Kelvin.
//! #[derive(Debug)]
//! struct Kelvin(f64);
//!
//! impl fmt::Display for Kelvin {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}K", self.native())
//!     }
//! }
//!
//! impl ValueType for Kelvin {
//!     type Native = f64;
//!
//!     fn native(&self) -> f64 {
//!         self.0 + 273.0
//!     }
//!
//!     fn compare(&self, other: &f64) -> Ordering {
//!         self.native().total_cmp(other)
//!     }
//! }
//!
//! let value = Value::new(Kelvin(20.0));
//! assert_eq!(value.column_type(), ColumnType::Float);
//! assert_eq!(value.as_f64().unwrap(), 293.0);
//! assert!(value.as_i64().is_err());
//! assert_eq!(value.to_string(), "293K");
//! ```

mod basic;
mod format;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use num_complex::{Complex32, Complex64};

use crate::column::ColumnType;
use crate::error::{FrameError, Result};

pub use basic::{BasicComplex, BasicFloat, BasicInt, BasicString, BasicUint};
pub use format::{format_complex, format_float};

/// Capability contract shared by every value family.
///
/// `Display` provides the text form used by exports.
pub trait ValueType: fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// The native type of the family this type belongs to.
    type Native: NativeType;

    /// Returns the native value.
    fn native(&self) -> Self::Native;

    /// Three-way comparison of this value against a native value.
    fn compare(&self, other: &Self::Native) -> Ordering;
}

/// Signed integer family.
pub type IntLike = dyn ValueType<Native = i64>;
/// Unsigned integer family.
pub type UintLike = dyn ValueType<Native = u64>;
/// Floating point family.
pub type FloatLike = dyn ValueType<Native = f64>;
/// Complex number family.
pub type ComplexLike = dyn ValueType<Native = Complex64>;
/// String family.
pub type StringLike = dyn ValueType<Native = String>;

mod sealed {
    pub trait Sealed {}
}

/// The five native types a [`ValueType`] can expose.
///
/// Sealed: the set of families is closed.
pub trait NativeType: sealed::Sealed + Sized + 'static {
    /// Column type of the family.
    const COLUMN_TYPE: ColumnType;

    #[doc(hidden)]
    fn wrap(payload: Arc<dyn ValueType<Native = Self>>) -> Value;

    #[doc(hidden)]
    fn unwrap(value: &Value) -> Option<&Arc<dyn ValueType<Native = Self>>>;
}

macro_rules! native_type {
    ($native:ty => $variant:ident) => {
        impl sealed::Sealed for $native {}

        impl NativeType for $native {
            const COLUMN_TYPE: ColumnType = ColumnType::$variant;

            fn wrap(payload: Arc<dyn ValueType<Native = Self>>) -> Value {
                Value::$variant(payload)
            }

            fn unwrap(value: &Value) -> Option<&Arc<dyn ValueType<Native = Self>>> {
                match value {
                    Value::$variant(payload) => Some(payload),
                    _ => None,
                }
            }
        }
    };
}

native_type!(i64 => Int);
native_type!(u64 => Uint);
native_type!(f64 => Float);
native_type!(Complex64 => Complex);
native_type!(String => String);

/// A table cell.
///
/// Cloning shares the payload.
#[derive(Debug, Clone)]
pub enum Value {
    Int(Arc<IntLike>),
    Uint(Arc<UintLike>),
    Float(Arc<FloatLike>),
    Complex(Arc<ComplexLike>),
    String(Arc<StringLike>),
}

impl Value {
    /// Wraps a payload in the variant of its family.
    pub fn new<T: ValueType>(payload: T) -> Self {
        <T::Native as NativeType>::wrap(Arc::new(payload))
    }

    /// Returns the column type (family) of the value.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Int(_) => ColumnType::Int,
            Value::Uint(_) => ColumnType::Uint,
            Value::Float(_) => ColumnType::Float,
            Value::Complex(_) => ColumnType::Complex,
            Value::String(_) => ColumnType::String,
        }
    }

    /// Returns the payload as its family trait object.
    ///
    /// Fails with [`FrameError::TypeMismatch`] if the value belongs to another family.
    pub fn handle<N: NativeType>(&self) -> Result<&Arc<dyn ValueType<Native = N>>> {
        N::unwrap(self).ok_or_else(|| FrameError::type_mismatch(N::COLUMN_TYPE, self.column_type()))
    }

    pub fn int_type(&self) -> Result<&Arc<IntLike>> {
        self.handle::<i64>()
    }

    pub fn uint_type(&self) -> Result<&Arc<UintLike>> {
        self.handle::<u64>()
    }

    pub fn float_type(&self) -> Result<&Arc<FloatLike>> {
        self.handle::<f64>()
    }

    pub fn complex_type(&self) -> Result<&Arc<ComplexLike>> {
        self.handle::<Complex64>()
    }

    pub fn string_type(&self) -> Result<&Arc<StringLike>> {
        self.handle::<String>()
    }

    // === Signed integers ===
    //
    // Narrower widths truncate like an `as` cast.

    pub fn as_i64(&self) -> Result<i64> {
        Ok(self.int_type()?.native())
    }

    pub fn as_isize(&self) -> Result<isize> {
        self.as_i64().map(|v| v as isize)
    }

    pub fn as_i32(&self) -> Result<i32> {
        self.as_i64().map(|v| v as i32)
    }

    pub fn as_i16(&self) -> Result<i16> {
        self.as_i64().map(|v| v as i16)
    }

    pub fn as_i8(&self) -> Result<i8> {
        self.as_i64().map(|v| v as i8)
    }

    // === Unsigned integers ===

    pub fn as_u64(&self) -> Result<u64> {
        Ok(self.uint_type()?.native())
    }

    pub fn as_usize(&self) -> Result<usize> {
        self.as_u64().map(|v| v as usize)
    }

    pub fn as_u32(&self) -> Result<u32> {
        self.as_u64().map(|v| v as u32)
    }

    pub fn as_u16(&self) -> Result<u16> {
        self.as_u64().map(|v| v as u16)
    }

    pub fn as_u8(&self) -> Result<u8> {
        self.as_u64().map(|v| v as u8)
    }

    // === Floats and complex numbers ===

    pub fn as_f64(&self) -> Result<f64> {
        Ok(self.float_type()?.native())
    }

    pub fn as_f32(&self) -> Result<f32> {
        self.as_f64().map(|v| v as f32)
    }

    pub fn as_c128(&self) -> Result<Complex64> {
        Ok(self.complex_type()?.native())
    }

    pub fn as_c64(&self) -> Result<Complex32> {
        self.as_c128()
            .map(|v| Complex32::new(v.re as f32, v.im as f32))
    }

    // === Strings ===

    /// Returns the native string of a string value.
    ///
    /// Unlike `to_string`, this fails for values of other families.
    pub fn as_string(&self) -> Result<String> {
        Ok(self.string_type()?.native())
    }

    /// Compares two values of the same family with the left payload's `compare`.
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a.compare(&b.native())),
            (Value::Uint(a), Value::Uint(b)) => Ok(a.compare(&b.native())),
            (Value::Float(a), Value::Float(b)) => Ok(a.compare(&b.native())),
            (Value::Complex(a), Value::Complex(b)) => Ok(a.compare(&b.native())),
            (Value::String(a), Value::String(b)) => Ok(a.compare(&b.native())),
            _ => Err(FrameError::CompareMismatch {
                left: self.column_type(),
                right: other.column_type(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(payload) => fmt::Display::fmt(payload, f),
            Value::Uint(payload) => fmt::Display::fmt(payload, f),
            Value::Float(payload) => fmt::Display::fmt(payload, f),
            Value::Complex(payload) => fmt::Display::fmt(payload, f),
            Value::String(payload) => fmt::Display::fmt(payload, f),
        }
    }
}

/// Values are equal when they share a family and compare `Equal`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

macro_rules! from_basic {
    ($basic:ident <- $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::new($basic(v.into()))
                }
            }
        )*
    };
}

from_basic!(BasicInt <- i64, i32, i16, i8);
from_basic!(BasicUint <- u64, u32, u16, u8);
from_basic!(BasicFloat <- f64, f32);
from_basic!(BasicString <- String, &str);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::new(BasicInt(v as i64))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::new(BasicUint(v as u64))
    }
}

impl From<Complex64> for Value {
    fn from(v: Complex64) -> Self {
        Value::new(BasicComplex(v))
    }
}

impl From<Complex32> for Value {
    fn from(v: Complex32) -> Self {
        Value::new(BasicComplex(Complex64::new(v.re.into(), v.im.into())))
    }
}
