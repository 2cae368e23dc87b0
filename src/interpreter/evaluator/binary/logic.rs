use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

impl Interpreter {
    /// Evaluates `and` / `or` on two already evaluated operands.
    ///
    /// The result is one of the operands, not a coerced boolean: `and` yields
    /// `left` if it is falsy and `right` otherwise, `or` yields `left` if it is
    /// truthy and `right` otherwise.
    ///
    /// # Example
    /// ```
    /// use quirk::{Interpreter, ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let left = Value::Integer(0);
    /// let right = Value::from("fallback");
    ///
    /// assert_eq!(Interpreter::eval_logic(BinaryOperator::Or, &left, &right), right);
    /// assert_eq!(Interpreter::eval_logic(BinaryOperator::And, &left, &right), left);
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let pick_left = match op {
            BinaryOperator::And => !left.is_truthy(),
            _ => left.is_truthy(),
        };
        if pick_left { left.clone() } else { right.clone() }
    }
}
