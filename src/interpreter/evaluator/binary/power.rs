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
    util::num::int_to_float,
};

impl Interpreter {
    /// Evaluates `left ** right`.
    ///
    /// An integer raised to a non-negative integer stays an integer, with
    /// overflow reported as a fault. A negative integer exponent or a float on
    /// either side yields a float. Zero raised to a negative power is a
    /// division by zero.
    ///
    /// # Example
    /// ```
    /// use quirk::{Interpreter, interpreter::value::core::Value};
    ///
    /// let int = Interpreter::eval_pow(&Value::Integer(2), &Value::Integer(10), 1).unwrap();
    /// let float = Interpreter::eval_pow(&Value::Integer(2), &Value::Integer(-1), 1).unwrap();
    ///
    /// assert_eq!(int, Value::Integer(1024));
    /// assert_eq!(float, Value::Float(0.5));
    /// ```
    pub fn eval_pow(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(base), Value::Integer(exponent)) if *exponent >= 0 => {
                u32::try_from(*exponent).ok()
                                        .and_then(|exponent| base.checked_pow(exponent))
                                        .map(Value::Integer)
                                        .ok_or_else(|| RuntimeError::IntegerOverflow {
                                            operation: "**".to_string(),
                                            line,
                                        })
            },
            (Value::Integer(base), Value::Integer(exponent)) => {
                Self::float_pow(int_to_float(*base), int_to_float(*exponent), line)
            },
            _ => match (left.as_float(), right.as_float()) {
                (Some(base), Some(exponent)) => Self::float_pow(base, exponent, line),
                _ => Err(unsupported(BinaryOperator::Pow, left, right, line)),
            },
        }
    }

    fn float_pow(base: f64, exponent: f64, line: usize) -> EvalResult<Value> {
        if base == 0.0 && exponent < 0.0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
            return Err(RuntimeError::TypeError { details: "Negative number cannot be raised to a \
                                                           fractional power"
                                                                            .to_string(),
                                                 line });
        }
        Ok(Value::Float(base.powf(exponent)))
    }
}
