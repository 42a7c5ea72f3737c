//! Text rendering of floats and complex numbers.
//!
//! Floats use the shortest digits that round-trip. Decimal exponents below
//! -4 or from 6 up switch to exponent form with at least two exponent digits
//! (`1e+06`, `1.5e-07`), like C's `%g` without a precision.

use num_complex::Complex64;

/// Formats a float the way float cells are exported.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "+Inf" } else { "-Inf" };
        return text.to_string();
    }
    if value == 0.0 {
        // Keeps the sign of negative zero.
        return format!("{value}");
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return format!("{value}"),
    };

    if (-4..6).contains(&exponent) {
        format!("{value}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Formats a complex number as `<re><±im>i`.
pub fn format_complex(value: Complex64) -> String {
    let re = format_float(value.re);
    let im = format_float(value.im);
    if im.starts_with('+') || im.starts_with('-') {
        format!("{re}{im}i")
    } else {
        format!("{re}+{im}i")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_notation_inside_exponent_window() {
        assert_eq!(format_float(1.0), "1");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(123456.7), "123456.7");
        assert_eq!(format_float(100000.0), "100000");
    }

    #[test]
    fn test_exponent_notation_outside_window() {
        assert_eq!(format_float(1e6), "1e+06");
        assert_eq!(format_float(1234567.0), "1.234567e+06");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(-1.5e-7), "-1.5e-07");
        assert_eq!(format_float(1e100), "1e+100");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(-0.0), "-0");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "+Inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn test_complex_parts_are_signed() {
        assert_eq!(format_complex(Complex64::new(1.0, -1.0)), "1-1i");
        assert_eq!(format_complex(Complex64::new(2.5, 0.0)), "2.5+0i");
        assert_eq!(format_complex(Complex64::new(0.0, f64::INFINITY)), "0+Infi");
        assert_eq!(format_complex(Complex64::new(-3.0, f64::NAN)), "-3+NaNi");
    }
}
