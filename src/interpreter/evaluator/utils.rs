use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Runs `f` inside a fresh innermost frame.
    ///
    /// The frame is popped whether `f` succeeds or fails, so a fault never
    /// leaks frames into the caller.
    pub(crate) fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.scopes.push();
        let result = f(self);
        self.scopes.pop();
        result
    }
}

/// Describes an argument count for error messages, e.g. `"1 to 3"`.
#[must_use]
pub fn describe_count(min: usize, max: Option<usize>) -> String {
    match max {
        Some(max) if max == min => min.to_string(),
        Some(max) => format!("{min} to {max}"),
        None => format!("at least {min}"),
    }
}

/// Ensures a builtin called directly from host code received `expected`
/// arguments.
///
/// # Errors
/// [`RuntimeError::ArityMismatch`] naming `function`.
pub fn check_arity(function: &str, args: &[Value], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArityMismatch { function: function.to_string(),
                                          expected: describe_count(expected, Some(expected)),
                                          found: args.len(),
                                          line })
    }
}
