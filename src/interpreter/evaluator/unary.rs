use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::int_to_float,
};

impl Interpreter {
    /// Evaluates a unary operation.
    ///
    /// # Parameters
    /// - `op`: `Negate` (`-`) or `Not` (`not`).
    /// - `expr`: The operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The negated number, or the boolean inverse of the operand's truthiness.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                expr: &Expr,
                                line: usize)
                                -> EvalResult<Value> {
        let value = self.evaluate(expr)?;
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Negate => negate(&value, line),
        }
    }

    /// Evaluates `name++` or `name--`.
    ///
    /// The variable is rebound in the frame that already holds it, searching
    /// outward from the innermost frame, and the expression yields the value
    /// from before the update.
    pub(crate) fn eval_postfix(&mut self, name: &str, delta: i64, line: usize) -> EvalResult<Value> {
        let current =
            self.scopes
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                               line })?;

        let operation = if delta > 0 { "++" } else { "--" };
        let updated = match &current {
            Value::Integer(i) => {
                i.checked_add(delta)
                 .map(Value::Integer)
                 .ok_or_else(|| RuntimeError::IntegerOverflow { operation: operation.to_string(),
                                                                line })?
            },
            Value::Float(f) => Value::Float(f + int_to_float(delta)),
            other => {
                return Err(RuntimeError::TypeError { details: format!("Unsupported operand type for \
                                                                       '{operation}': '{}'",
                                                                      other.type_name()),
                                                     line });
            },
        };

        self.scopes.assign_existing(name, updated);
        Ok(current)
    }
}

fn negate(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Integer(i) => {
            i.checked_neg()
             .map(Value::Integer)
             .ok_or_else(|| RuntimeError::IntegerOverflow { operation: "-".to_string(),
                                                            line })
        },
        Value::Float(f) => Ok(Value::Float(-f)),
        other => Err(RuntimeError::TypeError { details: format!("Bad operand type for unary '-': \
                                                                 '{}'",
                                                                other.type_name()),
                                               line }),
    }
}
