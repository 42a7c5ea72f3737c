//! Built-in payloads for primitive columns.

use std::cmp::Ordering;
use std::fmt;

use num_complex::Complex64;

use super::ValueType;
use super::format::{format_complex, format_float};

/// Payload of primitive signed integer columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicInt(pub i64);

/// Payload of primitive unsigned integer columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicUint(pub u64);

/// Payload of primitive float columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicFloat(pub f64);

/// Payload of primitive complex columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicComplex(pub Complex64);

/// Payload of primitive string columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicString(pub String);

impl ValueType for BasicInt {
    type Native = i64;

    fn native(&self) -> i64 {
        self.0
    }

    fn compare(&self, other: &i64) -> Ordering {
        self.0.cmp(other)
    }
}

impl fmt::Display for BasicInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ValueType for BasicUint {
    type Native = u64;

    fn native(&self) -> u64 {
        self.0
    }

    fn compare(&self, other: &u64) -> Ordering {
        self.0.cmp(other)
    }
}

impl fmt::Display for BasicUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Orders two floats, with NaN equal to NaN and greater than every number.
///
/// `-0.0` and `0.0` compare equal.
fn compare_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl ValueType for BasicFloat {
    type Native = f64;

    fn native(&self) -> f64 {
        self.0
    }

    fn compare(&self, other: &f64) -> Ordering {
        compare_f64(self.0, *other)
    }
}

impl fmt::Display for BasicFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_float(self.0))
    }
}

impl ValueType for BasicComplex {
    type Native = Complex64;

    fn native(&self) -> Complex64 {
        self.0
    }

    /// Lexicographic: real part first, then imaginary part.
    fn compare(&self, other: &Complex64) -> Ordering {
        match compare_f64(self.0.re, other.re) {
            Ordering::Equal => compare_f64(self.0.im, other.im),
            ordering => ordering,
        }
    }
}

impl fmt::Display for BasicComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_complex(self.0))
    }
}

impl ValueType for BasicString {
    type Native = String;

    fn native(&self) -> String {
        self.0.clone()
    }

    fn compare(&self, other: &String) -> Ordering {
        self.0.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for BasicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
