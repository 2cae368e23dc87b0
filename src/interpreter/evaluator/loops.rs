use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::core::{ExecResult, Flow, Interpreter},
};

impl Interpreter {
    /// Executes a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration. The body runs in
    /// the enclosing frame, so variables it assigns outlive the loop.
    ///
    /// # Returns
    /// `Flow::Normal` once the loop ends, or the `Flow::Return` that escaped
    /// the body.
    pub(crate) fn execute_while(&mut self, condition: &Expr, body: &[Statement]) -> ExecResult {
        while self.evaluate(condition)?.is_truthy() {
            match self.execute_block(body)? {
                Flow::Break { .. } => break,
                Flow::Normal | Flow::Continue { .. } => {},
                flow @ Flow::Return { .. } => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a `for` loop over the elements of `iterable`.
    ///
    /// The iterable is evaluated once. Each iteration pushes a fresh frame
    /// holding the loop variable; the frame is popped however the iteration
    /// ends, including on faults.
    ///
    /// # Errors
    /// A `TypeError` if `iterable` does not evaluate to a list, tuple, set,
    /// mapping or string, plus any fault raised by the body.
    pub(crate) fn execute_for(&mut self,
                              variable: &str,
                              iterable: &Expr,
                              body: &[Statement],
                              line: usize)
                              -> ExecResult {
        let elements = self.evaluate(iterable)?.elements(line)?;
        trace!(variable, count = elements.len(), "entering for loop");

        for element in elements {
            let flow = self.scoped(|interpreter| {
                                interpreter.scopes.set(variable, element);
                                interpreter.execute_block(body)
                            })?;
            match flow {
                Flow::Break { .. } => break,
                Flow::Normal | Flow::Continue { .. } => {},
                flow @ Flow::Return { .. } => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }
}
