use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::comparison::compare, core::EvalResult},
        value::core::Value,
    },
};

/// Computes the minimum or maximum of its arguments.
///
/// With a single argument, the elements of that iterable are compared;
/// otherwise the arguments themselves are. Values are ordered like `<` orders
/// them, and on ties the first candidate wins.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: One iterable, or at least two values.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// An empty sequence of candidates, or candidates that cannot be ordered
/// against each other.
///
/// # Example
/// ```
/// use quirk::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let r = min_max("min", &[Value::Integer(3), Value::Float(2.5)], 1).unwrap();
/// assert_eq!(r, Value::Float(2.5));
///
/// let items = Value::list(vec![Value::Integer(4), Value::Integer(9), Value::Integer(1)]);
/// let r = min_max("max", &[items], 1).unwrap();
/// assert_eq!(r, Value::Integer(9));
/// ```
pub fn min_max(name: &'static str, args: &[Value], line: usize) -> EvalResult<Value> {
    let candidates = match args {
        [iterable] => iterable.elements(line)?,
        _ => args.to_vec(),
    };
    let wanted = if name == "min" { Ordering::Less } else { Ordering::Greater };

    let mut candidates = candidates.into_iter();
    let first = candidates.next().ok_or_else(|| {
                                      RuntimeError::InvalidArgument { function: name,
                                                                      details:
                                                                          "arg is an empty sequence"
                                                                                               .to_string(),
                                                                      line }
                                  })?;

    candidates.try_fold(first, |best, candidate| {
                  match compare(&candidate, &best) {
                      Some(ordering) if ordering == wanted => Ok(candidate),
                      Some(_) => Ok(best),
                      None => {
                          Err(RuntimeError::InvalidArgument { function: name,
                                                              details:  format!("cannot compare \
                                                                                 '{}' and '{}'",
                                                                                candidate.type_name(),
                                                                                best.type_name()),
                                                              line })
                      },
                  }
              })
}
