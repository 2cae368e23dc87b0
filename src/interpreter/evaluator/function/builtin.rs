use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::{check_arity, describe_count},
        },
        value::core::Value,
    },
    util::num::usize_to_int,
};

/// Longest list `range` will build.
const MAX_RANGE_LEN: i64 = 1 << 26;

/// Builds a list of integers, like a counted loop.
///
/// - `range(stop)` counts `0, 1, ..., stop - 1`.
/// - `range(start, stop)` counts from `start` up to, not including, `stop`.
/// - `range(start, stop, step)` advances by `step`, which may be negative.
///
/// # Errors
/// - A non-integer argument.
/// - A zero `step`.
/// - A range too long to materialize.
///
/// # Example
/// ```
/// use quirk::interpreter::{evaluator::function::builtin::range, value::core::Value};
///
/// let r = range(&[Value::Integer(5), Value::Integer(0), Value::Integer(-2)], 1).unwrap();
/// assert_eq!(r,
///            Value::list(vec![Value::Integer(5), Value::Integer(3), Value::Integer(1)]));
/// ```
pub fn range(args: &[Value], line: usize) -> EvalResult<Value> {
    let bounds = args.iter()
                     .map(|arg| match arg {
                         Value::Integer(i) => Ok(*i),
                         other => Err(RuntimeError::InvalidArgument {
                             function: "range",
                             details: format!("expected int, got '{}'", other.type_name()),
                             line,
                         }),
                     })
                     .collect::<EvalResult<Vec<_>>>()?;

    let (start, stop, step) = match bounds.as_slice() {
        [stop] => (0, *stop, 1),
        [start, stop] => (*start, *stop, 1),
        [start, stop, step] => (*start, *stop, *step),
        _ => return Err(range_arity_error(args.len(), line)),
    };
    if step == 0 {
        return Err(RuntimeError::InvalidArgument { function: "range",
                                                   details:  "step must not be zero".to_string(),
                                                   line });
    }

    let span = i128::from(stop) - i128::from(start);
    let count = if (span > 0) == (step > 0) && span != 0 {
        (span.abs() + i128::from(step).abs() - 1) / i128::from(step).abs()
    } else {
        0
    };
    if count > i128::from(MAX_RANGE_LEN) {
        return Err(RuntimeError::InvalidArgument { function: "range",
                                                   details:  format!("range of {count} \
                                                                      elements is too long"),
                                                   line });
    }

    let mut items = Vec::new();
    let mut current = start;
    for _ in 0..count {
        items.push(Value::Integer(current));
        current = current.saturating_add(step);
    }
    Ok(Value::list(items))
}

fn range_arity_error(found: usize, line: usize) -> RuntimeError {
    RuntimeError::ArityMismatch { function: "range".to_string(),
                                  expected: describe_count(1, Some(3)),
                                  found,
                                  line }
}

/// Returns the number of characters of a string, or of elements of a list,
/// tuple, set or mapping.
///
/// # Example
/// ```
/// use quirk::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("héllo")], 1).unwrap(), Value::Integer(5));
/// ```
pub fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("len", args, 1, line)?;

    let len = match &args[0] {
        Value::String(s) => s.chars().count(),
        Value::List(items) => items.borrow().len(),
        Value::Tuple(items) => items.len(),
        Value::Set(items) => items.borrow().len(),
        Value::Map(entries) => entries.borrow().len(),
        Value::Module(namespace) => namespace.bindings.len(),
        other => {
            return Err(RuntimeError::InvalidArgument { function: "len",
                                                       details:  format!("object of type '{}' \
                                                                          has no length",
                                                                         other.type_name()),
                                                       line });
        },
    };
    usize_to_int(len, line).map(Value::Integer)
}

/// Adds up the numbers of an iterable, starting from integer `0`.
///
/// # Errors
/// A non-iterable argument, or an element `+` cannot add.
pub fn sum(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("sum", args, 1, line)?;

    args[0].elements(line)?
           .iter()
           .try_fold(Value::Integer(0), |total, element| match element {
               Value::Integer(_) | Value::Float(_) => {
                   Interpreter::apply_binary(BinaryOperator::Add, &total, element, line)
               },
               other => Err(RuntimeError::InvalidArgument { function: "sum",
                                                            details:  format!("cannot add '{}'",
                                                                              other.type_name()),
                                                            line }),
           })
}
