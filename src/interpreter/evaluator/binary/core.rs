use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates both operands of a binary expression, left first, and
    /// applies the operator.
    ///
    /// `and` and `or` also evaluate both operands before choosing one.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        Self::apply_binary(op, &left, &right, line)
    }

    /// Applies a binary operator to two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator and operand types. Numbers go to `eval_scalar_op`, strings
    /// lists and tuples to the sequence handlers, sets to `eval_set_difference`.
    /// Equality works on any pair of values; ordering uses `eval_ordering`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use quirk::{
    ///     Interpreter,
    ///     ast::BinaryOperator,
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let result = Interpreter::apply_binary(BinaryOperator::Mod,
    ///                                        &Value::Integer(-7),
    ///                                        &Value::Integer(3),
    ///                                        1);
    /// assert_eq!(result.unwrap(), Value::Integer(2));
    ///
    /// let joined = Interpreter::apply_binary(BinaryOperator::Add,
    ///                                        &Value::from("ab"),
    ///                                        &Value::from("cd"),
    ///                                        1);
    /// assert_eq!(joined.unwrap(), Value::from("abcd"));
    /// ```
    pub fn apply_binary(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, IntDiv, Less, Mod, Mul, NotEqual, Or, Pow, Sub,
        };
        use Value::{Float, Integer, List, Set, String, Tuple};

        match op {
            Add | Sub | Mul | Div | IntDiv | Mod => match (left, right) {
                (Integer(_) | Float(_), Integer(_) | Float(_)) => {
                    Self::eval_scalar_op(op, left, right, line)
                },
                (String(_) | List(_) | Tuple(_), _) if op == Add => {
                    Self::eval_concat(left, right, line)
                },
                (String(_) | List(_) | Tuple(_), Integer(count)) if op == Mul => {
                    Self::eval_repeat(left, *count, line)
                },
                (Integer(count), String(_) | List(_) | Tuple(_)) if op == Mul => {
                    Self::eval_repeat(right, *count, line)
                },
                (Set(a), Set(b)) if op == Sub => Ok(Self::eval_set_difference(a, b)),
                _ => Err(unsupported(op, left, right, line)),
            },

            Pow => Self::eval_pow(left, right, line),

            Equal => Ok(Value::Bool(left == right)),
            NotEqual => Ok(Value::Bool(left != right)),

            Greater | Less => Self::eval_ordering(op, left, right, line),

            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}

/// Builds the fault for an operator applied to operand types it does not
/// support.
pub(crate) fn unsupported(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> RuntimeError {
    RuntimeError::TypeError { details: format!("Unsupported operand types for '{op}': '{}' and '{}'",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
