use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::compare_int_float,
};

impl Interpreter {
    /// Evaluates `<` or `>`.
    ///
    /// Numbers order numerically across integers and floats, strings and
    /// booleans by their natural order, and lists and tuples lexicographically.
    /// Any other pairing is a type error.
    ///
    /// # Example
    /// ```
    /// use quirk::{Interpreter, ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let less = Interpreter::eval_ordering(BinaryOperator::Less,
    ///                                       &Value::Integer(1),
    ///                                       &Value::Float(1.5),
    ///                                       1).unwrap();
    /// assert_eq!(less, Value::Bool(true));
    /// ```
    pub fn eval_ordering(op: BinaryOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        let ordering = compare(left, right).ok_or_else(|| {
                           RuntimeError::TypeError { details: format!("'{op}' not supported between \
                                                                       '{}' and '{}'",
                                                                      left.type_name(),
                                                                      right.type_name()),
                                                     line }
                       })?;

        Ok(Value::Bool(match op {
                           BinaryOperator::Less => ordering == Ordering::Less,
                           _ => ordering == Ordering::Greater,
                       }))
    }
}

/// Orders two values, or returns `None` if they are not comparable.
///
/// NaN is unordered against everything, so comparisons involving it are
/// reported as `Some(Ordering::Equal)` and both `<` and `>` are false.
#[must_use]
pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Some(a.partial_cmp(b).unwrap_or(Ordering::Equal)),
        (Value::Integer(a), Value::Float(b)) => {
            Some(compare_int_float(*a, *b).unwrap_or(Ordering::Equal))
        },
        (Value::Float(a), Value::Integer(b)) => {
            Some(compare_int_float(*b, *a).map_or(Ordering::Equal, Ordering::reverse))
        },
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::List(a), Value::List(b)) => compare_sequences(&a.borrow(), &b.borrow()),
        (Value::Tuple(a), Value::Tuple(b)) => compare_sequences(a, b),
        _ => None,
    }
}

/// Lexicographic order: the first unequal pair decides, then length.
fn compare_sequences(left: &[Value], right: &[Value]) -> Option<Ordering> {
    for (a, b) in left.iter().zip(right) {
        if a != b {
            return compare(a, b);
        }
    }
    Some(left.len().cmp(&right.len()))
}
