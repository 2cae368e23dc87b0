use std::cmp::Ordering;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `i64` to `f64` for mixed integer/float arithmetic.
///
/// Magnitudes above `2^53` round to the nearest representable float, which is
/// the promotion rule of the language.
///
/// ## Example
/// ```
/// use quirk::util::num::int_to_float;
///
/// assert_eq!(int_to_float(42), 42.0);
/// assert_eq!(int_to_float(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn int_to_float(value: i64) -> f64 {
    value as f64
}

/// Converts a collection length to a language integer.
///
/// ## Errors
/// Returns [`RuntimeError::IntegerOverflow`] if the length does not fit in an
/// `i64`.
pub fn usize_to_int(value: usize, line: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::IntegerOverflow { operation: "len".to_string(),
                                                                     line })
}

/// Resolves a possibly negative index against a sequence length.
///
/// Negative indices count from the end, so `-1` is the last element.
///
/// ## Returns
/// - `Some(usize)`: The position inside `0..len`.
/// - `None`: If the index is out of range.
///
/// ## Example
/// ```
/// use quirk::util::num::resolve_index;
///
/// assert_eq!(resolve_index(1, 3), Some(1));
/// assert_eq!(resolve_index(-1, 3), Some(2));
/// assert_eq!(resolve_index(3, 3), None);
/// assert_eq!(resolve_index(-4, 3), None);
/// ```
#[must_use]
pub fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let position = if index < 0 { index + len } else { index };
    if (0..len).contains(&position) {
        usize::try_from(position).ok()
    } else {
        None
    }
}

/// `2^63` as a float: the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Orders an integer against a float without rounding the integer.
///
/// Converting large integers with [`int_to_float`] loses precision above
/// `2^53`, so this compares against the float's integral part exactly and
/// lets the fractional part break ties.
///
/// ## Returns
/// - `Some(Ordering)`: How `int` orders against `float`.
/// - `None`: If `float` is NaN.
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use quirk::util::num::compare_int_float;
///
/// assert_eq!(compare_int_float(2, 2.0), Some(Ordering::Equal));
/// assert_eq!(compare_int_float(2, 2.5), Some(Ordering::Less));
/// assert_eq!(compare_int_float(9_007_199_254_740_993, 9_007_199_254_740_992.0),
///            Some(Ordering::Greater));
/// assert_eq!(compare_int_float(i64::MAX, f64::INFINITY), Some(Ordering::Less));
/// assert_eq!(compare_int_float(0, f64::NAN), None);
/// ```
#[must_use]
pub fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I64_BOUND {
        return Some(Ordering::Greater);
    }

    let whole = float.trunc();
    #[allow(clippy::cast_possible_truncation)]
    let whole_int = whole as i64;
    let ordering = int.cmp(&whole_int).then_with(|| {
                                          let fraction = float - whole;
                                          if fraction > 0.0 {
                                              Ordering::Less
                                          } else if fraction < 0.0 {
                                              Ordering::Greater
                                          } else {
                                              Ordering::Equal
                                          }
                                      });
    Some(ordering)
}

/// Integer floor division: the quotient rounded towards negative infinity.
///
/// Returns `None` on division by zero or overflow (`i64::MIN // -1`).
///
/// ## Example
/// ```
/// use quirk::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(1, 0), None);
/// ```
#[must_use]
pub fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Integer modulo consistent with [`floor_div`]: the result takes the sign of
/// the divisor, so `a == floor_div(a, b) * b + floor_mod(a, b)`.
///
/// Returns `None` on division by zero.
///
/// ## Example
/// ```
/// use quirk::util::num::floor_mod;
///
/// assert_eq!(floor_mod(7, 3), Some(1));
/// assert_eq!(floor_mod(-7, 3), Some(2));
/// assert_eq!(floor_mod(7, -3), Some(-2));
/// assert_eq!(floor_mod(7, 0), None);
/// ```
#[must_use]
pub fn floor_mod(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        return None;
    }
    if b == -1 {
        return Some(0);
    }
    let remainder = a % b;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}

/// Float modulo taking the sign of the divisor.
#[must_use]
pub fn float_mod(a: f64, b: f64) -> f64 {
    let remainder = a % b;
    if remainder != 0.0 && ((remainder < 0.0) != (b < 0.0)) {
        remainder + b
    } else {
        remainder
    }
}

/// Formats a float so that it always reads back as a float literal.
///
/// Integral values keep one fractional digit.
///
/// ## Example
/// ```
/// use quirk::util::num::format_float;
///
/// assert_eq!(format_float(2.0), "2.0");
/// assert_eq!(format_float(-0.25), "-0.25");
/// assert_eq!(format_float(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
