use std::{collections::BTreeSet, rc::Rc};

use tracing::trace;

use crate::{
    ast::{CompoundOperator, Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, ExecResult, Flow, Interpreter},
        value::{core::Value, key::Key},
    },
};

impl Interpreter {
    /// Executes a single statement and reports how control leaves it.
    ///
    /// # Parameters
    /// - `statement`: The statement to execute.
    ///
    /// # Returns
    /// - `Flow::Normal` when execution continues with the next statement.
    /// - `Flow::Break`, `Flow::Continue` or `Flow::Return` while a control
    ///   signal unwinds.
    ///
    /// # Errors
    /// Any runtime fault raised while evaluating the statement.
    pub fn execute(&mut self, statement: &Statement) -> ExecResult {
        match statement {
            Statement::Assign { target, value, line } => {
                let value = self.evaluate(value)?;
                self.assign(target, value, *line)?;
                Ok(Flow::Normal)
            },
            Statement::CompoundAssign { name, op, value, line } => {
                self.compound_assign(name, *op, value, *line)?;
                Ok(Flow::Normal)
            },
            Statement::Print { values, sep, end, line } => {
                self.execute_print(values, sep.as_ref(), end.as_ref(), *line)?;
                Ok(Flow::Normal)
            },
            Statement::Expression { expr, .. } => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute_block(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute_block(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body, .. } => self.execute_while(condition, body),
            Statement::ForEach { variable,
                                 iterable,
                                 body,
                                 line, } => self.execute_for(variable, iterable, body, *line),
            Statement::FunctionDef(function) => {
                self.define_function(function);
                Ok(Flow::Normal)
            },
            Statement::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::None,
                };
                Ok(Flow::Return { value, line: *line })
            },
            Statement::Break { line } => Ok(Flow::Break { line: *line }),
            Statement::Continue { line } => Ok(Flow::Continue { line: *line }),
            Statement::Import { module, line } => {
                let namespace = self.import_module(module, *line)?;
                self.scopes.set(module.as_str(), Value::Module(namespace));
                Ok(Flow::Normal)
            },
        }
    }

    /// Executes statements in order, stopping at the first control signal.
    ///
    /// No frame is pushed; blocks share the frame of the enclosing statement.
    pub fn execute_block(&mut self, statements: &[Statement]) -> ExecResult {
        for statement in statements {
            let flow = self.execute(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Binds `value` to an assignment target in the innermost frame.
    fn assign(&mut self, target: &Expr, value: Value, line: usize) -> EvalResult<()> {
        match target {
            Expr::Variable { name, .. } => {
                self.scopes.set(name.as_str(), value);
                Ok(())
            },
            Expr::TuplePattern { names, .. } => {
                let Value::Tuple(items) = &value else {
                    return Err(RuntimeError::TupleAssignmentType { type_name: value.type_name(),
                                                                   line });
                };
                if items.len() != names.len() {
                    return Err(RuntimeError::TupleLengthMismatch { expected: names.len(),
                                                                   found: items.len(),
                                                                   line });
                }
                for (name, item) in names.iter().zip(items.iter()) {
                    self.scopes.set(name.as_str(), item.clone());
                }
                Ok(())
            },
            _ => Err(RuntimeError::InvalidExpression { details: "Invalid assignment target".to_string(),
                                                       line }),
        }
    }

    /// Executes `name op= value`.
    ///
    /// `+=` and `-=` compute a new value and bind it in the innermost frame.
    /// The set operators update the set held by `name` in place, so every
    /// alias of the set observes the change; the right-hand side may be any
    /// iterable.
    fn compound_assign(&mut self,
                       name: &str,
                       op: CompoundOperator,
                       value: &Expr,
                       line: usize)
                       -> EvalResult<()> {
        let current = self.lookup(name)
                          .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                         line })?;
        let operand = self.evaluate(value)?;

        if let Some(binary) = op.arithmetic() {
            let updated = Self::apply_binary(binary, &current, &operand, line)?;
            self.scopes.set(name, updated);
            return Ok(());
        }

        let Value::Set(set) = &current else {
            return Err(RuntimeError::TypeError { details: format!("Operator '{op}' requires a set, \
                                                                   got '{}'",
                                                                  current.type_name()),
                                                 line });
        };
        let keys = operand.elements(line)?
                          .iter()
                          .map(|element| Key::try_from_value(element, line))
                          .collect::<EvalResult<Vec<_>>>()?;

        let mut set = set.borrow_mut();
        match op {
            CompoundOperator::Union => set.extend(keys),
            CompoundOperator::Difference => {
                for key in &keys {
                    set.remove(key);
                }
            },
            CompoundOperator::SymmetricDifference => {
                let mut seen = BTreeSet::new();
                for key in keys {
                    if seen.insert(key.clone()) && !set.remove(&key) {
                        set.insert(key);
                    }
                }
            },
            CompoundOperator::Add | CompoundOperator::Sub => {},
        }
        drop(set);

        self.scopes.set(name, current);
        Ok(())
    }

    /// Registers a function definition and binds its name as a value.
    fn define_function(&mut self, function: &Rc<FunctionDef>) {
        trace!(name = %function.name, params = function.params.len(), "defining function");
        self.functions.insert(function.name.clone(), Rc::clone(function));
        self.scopes.set(function.name.as_str(), Value::Function(Rc::clone(function)));
    }
}
