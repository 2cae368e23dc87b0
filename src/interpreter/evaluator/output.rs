use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Destination of `print` output, shared with module interpreters.
pub type OutputSink = Rc<RefCell<dyn Write>>;

/// An output sink writing to the process's standard output.
#[must_use]
pub fn stdout_sink() -> OutputSink {
    Rc::new(RefCell::new(io::stdout()))
}

impl Interpreter {
    /// Executes a `print` statement.
    ///
    /// Values are displayed in order, joined by the separator (default a
    /// single space) and followed by the end string (default a newline).
    /// Output is flushed after every statement so it interleaves correctly
    /// with diagnostics.
    ///
    /// # Errors
    /// - A separator or end value that is not a string.
    /// - A failed write.
    pub(crate) fn execute_print(&mut self,
                                values: &[Expr],
                                sep: Option<&Expr>,
                                end: Option<&Expr>,
                                line: usize)
                                -> EvalResult<()> {
        let values = self.evaluate_all(values)?;
        let sep = self.print_option(sep, "sep", " ", line)?;
        let end = self.print_option(end, "end", "\n", line)?;

        let text = values.iter()
                         .map(ToString::to_string)
                         .collect::<Vec<_>>()
                         .join(&sep);

        let mut output = self.output.borrow_mut();
        write!(output, "{text}{end}").and_then(|()| output.flush())
                                     .map_err(|source| RuntimeError::Output { source, line })
    }

    fn print_option(&mut self,
                    expr: Option<&Expr>,
                    clause: &str,
                    default: &str,
                    line: usize)
                    -> EvalResult<String> {
        match expr {
            None => Ok(default.to_string()),
            Some(expr) => match self.evaluate(expr)? {
                Value::String(s) => Ok(s.to_string()),
                other => Err(RuntimeError::TypeError { details: format!("print '{clause}' must \
                                                                         be a string, not '{}'",
                                                                        other.type_name()),
                                                       line }),
            },
        }
    }
}
