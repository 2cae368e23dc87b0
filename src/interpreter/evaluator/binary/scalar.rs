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
    util::num::{float_mod, floor_div, floor_mod, int_to_float},
};

impl Interpreter {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers stay integers, except under `/` which always yields a
    /// float. A float on either side promotes the other operand. Integer
    /// overflow and division or modulo by zero are faults; `//` and `%` round
    /// towards negative infinity, so the remainder takes the divisor's sign.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div`, `IntDiv` or `Mod`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed number.
    ///
    /// # Example
    /// ```
    /// use quirk::{Interpreter, ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let result = Interpreter::eval_scalar_op(BinaryOperator::Div,
    ///                                          &Value::Integer(7),
    ///                                          &Value::Integer(2),
    ///                                          1).unwrap();
    /// assert_eq!(result, Value::Float(3.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, IntDiv, Mod, Mul, Sub};

        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            let (a, b) = (*a, *b);
            let overflow = || RuntimeError::IntegerOverflow { operation: op.to_string(),
                                                              line };
            return match op {
                Add => a.checked_add(b).map(Value::Integer).ok_or_else(overflow),
                Sub => a.checked_sub(b).map(Value::Integer).ok_or_else(overflow),
                Mul => a.checked_mul(b).map(Value::Integer).ok_or_else(overflow),
                Div => Self::eval_float_op(op, int_to_float(a), int_to_float(b), line),
                IntDiv | Mod => {
                    if b == 0 {
                        return Err(RuntimeError::DivisionByZero { line });
                    }
                    let result = if op == IntDiv { floor_div(a, b) } else { floor_mod(a, b) };
                    result.map(Value::Integer).ok_or_else(overflow)
                },
                _ => Err(unsupported(op, left, right, line)),
            };
        }

        match (left.as_float(), right.as_float()) {
            (Some(a), Some(b)) => Self::eval_float_op(op, a, b, line),
            _ => Err(unsupported(op, left, right, line)),
        }
    }

    fn eval_float_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, IntDiv, Mod, Mul, Sub};

        if matches!(op, Div | IntDiv | Mod) && b == 0.0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        Ok(Value::Float(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div => a / b,
                            IntDiv => (a / b).floor(),
                            Mod => float_mod(a, b),
                            _ => {
                                return Err(RuntimeError::TypeError { details:
                                                                         format!("Operator '{op}' is not arithmetic"),
                                                                     line });
                            },
                        }))
    }
}
