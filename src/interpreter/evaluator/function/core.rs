use std::{collections::HashMap, fmt, mem, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Flow, Interpreter, MAX_CALL_DEPTH},
            function::{builtin, min_max},
            utils::describe_count,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number
/// of the call. The argument count has already been checked against its
/// [`Arity`].
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Between(min, max)` accepts any count in `min..=max`.
/// - `AtLeast(n)` accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// An inclusive range of argument counts.
    Between(usize, usize),
    /// This many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Between(min, max) => min <= n && n <= max,
            Self::AtLeast(min) => n >= min,
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Exact(n) => describe_count(n, Some(n)),
            Self::Between(min, max) => describe_count(min, Some(max)),
            Self::AtLeast(min) => describe_count(min, None),
        }
    }
}

/// A host-provided function callable from scripts.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name scripts call it by.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Builtin {
    /// Checks the argument count and invokes the builtin.
    ///
    /// # Errors
    /// [`RuntimeError::ArityMismatch`] for a wrong argument count, otherwise
    /// whatever the builtin reports.
    pub fn call(&self, args: &[Value], line: usize) -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            return Err(RuntimeError::ArityMismatch { function: self.name.to_string(),
                                                     expected: self.arity.describe(),
                                                     found: args.len(),
                                                     line });
        }
        (self.func)(args, line)
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table every interpreter starts from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the builtins every interpreter starts with.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "range" => { arity: Arity::Between(1, 3), func: builtin::range },
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "sum"   => { arity: Arity::Exact(1), func: builtin::sum },
    "min"   => { arity: Arity::AtLeast(1), func: |args, line| min_max::min_max("min", args, line) },
    "max"   => { arity: Arity::AtLeast(1), func: |args, line| min_max::min_max("max", args, line) },
}

/// The builtin table a fresh interpreter starts with.
#[must_use]
pub fn default_builtins() -> HashMap<&'static str, Builtin> {
    BUILTIN_TABLE.iter().map(|builtin| (builtin.name, *builtin)).collect()
}

impl Interpreter {
    /// Adds a builtin to this interpreter, replacing any builtin of the same
    /// name. Modules imported afterwards see it too.
    ///
    /// # Example
    /// ```
    /// use quirk::{
    ///     Interpreter,
    ///     interpreter::{evaluator::function::core::Arity, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.register_builtin("answer", Arity::Exact(0), |_, _| Ok(Value::Integer(42)));
    /// interpreter.run_source("x = answer()").unwrap();
    ///
    /// assert_eq!(interpreter.global("x"), Some(Value::Integer(42)));
    /// ```
    pub fn register_builtin(&mut self, name: &'static str, arity: Arity, func: BuiltinFn) {
        self.builtins.insert(name, Builtin { name, arity, func });
    }

    /// Resolves a name: scope frames first, then the function table, then the
    /// builtins.
    pub(crate) fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.scopes.get(name) {
            return Some(value.clone());
        }
        if let Some(function) = self.functions.get(name) {
            return Some(Value::Function(Rc::clone(function)));
        }
        self.builtins.get(name).copied().map(Value::Builtin)
    }

    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Value> {
        let callee = self.evaluate(callee)?;
        let args = self.evaluate_all(arguments)?;
        self.call_value(&callee, args, line)
    }

    /// Calls a function value with evaluated arguments.
    ///
    /// # Errors
    /// [`RuntimeError::NotCallable`] if `callee` is neither a user-defined
    /// function nor a builtin.
    pub fn call_value(&mut self, callee: &Value, args: Vec<Value>, line: usize) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => self.call_function(function, args, line),
            Value::Builtin(builtin) => builtin.call(&args, line),
            other => Err(RuntimeError::NotCallable { type_name: other.type_name(),
                                                     line }),
        }
    }

    /// Executes a user-defined function.
    ///
    /// A new frame is pushed on top of the caller's frames and the parameters
    /// are bound in it positionally. The body's `return` value is the result;
    /// a body that completes without one yields `none`.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - Calls nested deeper than [`MAX_CALL_DEPTH`].
    /// - `break` or `continue` escaping the body.
    fn call_function(&mut self,
                     function: &FunctionDef,
                     args: Vec<Value>,
                     line: usize)
                     -> EvalResult<Value> {
        if args.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { function: function.name.clone(),
                                                     expected: function.params.len().to_string(),
                                                     found: args.len(),
                                                     line });
        }
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { limit: MAX_CALL_DEPTH,
                                                      line });
        }

        trace!(name = %function.name, depth = self.scopes.depth() + 1, "calling function");

        self.call_depth += 1;
        let caller_expr_depth = mem::take(&mut self.expr_depth);
        let flow = self.scoped(|interpreter| {
                           for (param, arg) in function.params.iter().zip(args) {
                               interpreter.scopes.set(param.as_str(), arg);
                           }
                           interpreter.execute_block(&function.body)
                       });
        self.expr_depth = caller_expr_depth;
        self.call_depth -= 1;

        match flow? {
            Flow::Normal => Ok(Value::None),
            Flow::Return { value, .. } => Ok(value),
            Flow::Break { line } => Err(RuntimeError::BreakOutsideLoop { line }),
            Flow::Continue { line } => Err(RuntimeError::ContinueOutsideLoop { line }),
        }
    }
}
