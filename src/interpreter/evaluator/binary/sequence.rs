use std::iter;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{EvalResult, Interpreter},
        },
        value::core::Value,
    },
};

/// Longest sequence `*` will build.
const MAX_REPEAT_LEN: usize = 1 << 28;

impl Interpreter {
    /// Concatenates two strings, two lists or two tuples into a new value.
    ///
    /// The operands are left untouched; `+` on lists never aliases either
    /// input.
    pub(crate) fn eval_concat(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::String(a), Value::String(b)) => Ok(Value::from(format!("{a}{b}"))),
            (Value::List(a), Value::List(b)) => {
                let mut items = a.borrow().clone();
                items.extend(b.borrow().iter().cloned());
                Ok(Value::list(items))
            },
            (Value::Tuple(a), Value::Tuple(b)) => {
                Ok(Value::tuple(a.iter().chain(b.iter()).cloned().collect()))
            },
            _ => Err(unsupported(BinaryOperator::Add, left, right, line)),
        }
    }

    /// Repeats a string, list or tuple `count` times. A count of zero or less
    /// yields an empty sequence.
    pub(crate) fn eval_repeat(sequence: &Value, count: i64, line: usize) -> EvalResult<Value> {
        let times = usize::try_from(count).unwrap_or(0);
        let len = match sequence {
            Value::String(s) => s.len(),
            Value::List(items) => items.borrow().len(),
            Value::Tuple(items) => items.len(),
            _ => 0,
        };
        if len.checked_mul(times).is_none_or(|total| total > MAX_REPEAT_LEN) {
            return Err(RuntimeError::IntegerOverflow { operation: "*".to_string(),
                                                       line });
        }

        match sequence {
            Value::String(s) => Ok(Value::from(s.repeat(times))),
            Value::List(items) => Ok(Value::list(repeat_items(&items.borrow(), times))),
            Value::Tuple(items) => Ok(Value::tuple(repeat_items(items, times))),
            other => Err(unsupported(BinaryOperator::Mul, other, &Value::Integer(count), line)),
        }
    }
}

/// Concatenates `times` copies of `items`.
fn repeat_items(items: &[Value], times: usize) -> Vec<Value> {
    iter::repeat_n(items, times).flatten().cloned().collect()
}
