use std::{collections::HashMap, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Expr, FunctionDef, NumberLiteral, Program},
    config::InterpreterConfig,
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::{
            function::core::{Builtin, default_builtins},
            output::{OutputSink, stdout_sink},
            scope::ScopeStack,
        },
        value::core::{Namespace, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result of executing a statement: how control leaves it, or a fault.
pub type ExecResult = EvalResult<Flow>;

/// Deepest nesting of user-function calls before execution is aborted.
pub const MAX_CALL_DEPTH: usize = 128;

/// Deepest expression tree evaluated within one function body.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// How control leaves a statement.
///
/// `Break` and `Continue` travel up to the nearest enclosing loop, `Return` up
/// to the nearest enclosing call. They share the success channel of
/// [`ExecResult`] so that fault handling never sees them.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// The statement completed; continue with the next one.
    Normal,
    /// A `break` is unwinding.
    Break {
        /// Line of the `break` statement.
        line: usize,
    },
    /// A `continue` is unwinding.
    Continue {
        /// Line of the `continue` statement.
        line: usize,
    },
    /// A `return` is unwinding with its value.
    Return {
        /// The returned value.
        value: Value,
        /// Line of the `return` statement.
        line:  usize,
    },
}

/// Stores the runtime state of one program run.
///
/// An `Interpreter` holds the scope stack, the function table, the built-in
/// table and the cache of imported modules. Every module is executed by its
/// own `Interpreter`, which shares only the configuration and the output
/// sink with the importer.
///
/// ## Usage
///
/// ```
/// use quirk::{Interpreter, interpreter::value::core::Value, parse};
///
/// let mut interpreter = Interpreter::new();
/// interpreter.run(&parse("x = 5 + 3\ny = x + 10").unwrap()).unwrap();
///
/// assert_eq!(interpreter.global("y"), Some(Value::Integer(18)));
/// ```
pub struct Interpreter {
    pub(crate) scopes:       ScopeStack,
    /// Every function defined so far, by name.
    pub(crate) functions:    HashMap<String, Rc<FunctionDef>>,
    pub(crate) builtins:     HashMap<&'static str, Builtin>,
    /// Namespaces of imported modules, by import name.
    pub(crate) modules:      HashMap<String, Rc<Namespace>>,
    pub(crate) config:       Rc<InterpreterConfig>,
    pub(crate) output:       OutputSink,
    /// Modules whose loading led to this interpreter, outermost first.
    pub(crate) import_chain: Vec<String>,
    pub(crate) call_depth:   usize,
    /// Nesting of `evaluate` calls within the current function body.
    pub(crate) expr_depth:   usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with the default configuration, printing to
    /// stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    /// Creates an interpreter with `config`, printing to stdout.
    #[must_use]
    pub fn with_config(config: InterpreterConfig) -> Self {
        Self::from_parts(Rc::new(config), stdout_sink(), default_builtins(), Vec::new())
    }

    pub(crate) fn from_parts(config: Rc<InterpreterConfig>,
                             output: OutputSink,
                             builtins: HashMap<&'static str, Builtin>,
                             import_chain: Vec<String>)
                             -> Self {
        Self { scopes: ScopeStack::new(),
               functions: HashMap::new(),
               builtins,
               modules: HashMap::new(),
               config,
               output,
               import_chain,
               call_depth: 0,
               expr_depth: 0 }
    }

    /// Redirects `print` output, including output of imported modules, to
    /// `output`.
    #[must_use]
    pub fn with_output(mut self, output: OutputSink) -> Self {
        self.output = output;
        self
    }

    /// The configuration this interpreter runs with.
    #[must_use]
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Reads a variable from the global frame.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<Value> {
        self.scopes.globals().get(name).cloned()
    }

    /// Returns `true` if `module` has been imported by this interpreter.
    #[must_use]
    pub fn is_module_loaded(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Executes every statement of `program` in order.
    ///
    /// State persists across calls, so a host can feed a program in pieces.
    ///
    /// # Errors
    /// The first runtime fault, including a `break`, `continue` or `return`
    /// that is not enclosed by a loop or function.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        trace!(statements = program.statements.len(), "running program");
        for statement in &program.statements {
            match self.execute(statement)? {
                Flow::Normal => {},
                Flow::Break { line } => return Err(RuntimeError::BreakOutsideLoop { line }),
                Flow::Continue { line } => {
                    return Err(RuntimeError::ContinueOutsideLoop { line });
                },
                Flow::Return { line, .. } => {
                    return Err(RuntimeError::ReturnOutsideFunction { line });
                },
            }
        }
        Ok(())
    }

    /// Tokenizes, parses and runs `source`.
    ///
    /// # Errors
    /// A syntax error if `source` is not a valid program, otherwise the first
    /// runtime fault.
    pub fn run_source(&mut self, source: &str) -> Result<(), Error> {
        let program = crate::parse(source)?;
        self.run(&program)?;
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation; it dispatches
    /// on the expression variant.
    ///
    /// # Example
    /// ```
    /// use quirk::{
    ///     Interpreter,
    ///     ast::{BinaryOperator, Expr, NumberLiteral},
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let number = |n| Box::new(Expr::Number { value: NumberLiteral::Integer(n),
    ///                                          line:  1, });
    /// let expr = Expr::BinaryOp { left:  number(7),
    ///                             op:    BinaryOperator::IntDiv,
    ///                             right: number(-2),
    ///                             line:  1, };
    ///
    /// assert_eq!(Interpreter::new().evaluate(&expr).unwrap(), Value::Integer(-4));
    /// ```
    ///
    /// # Errors
    /// Any runtime fault of the expression, or `ExpressionTooDeep` if the tree
    /// nests deeper than [`MAX_EXPRESSION_DEPTH`].
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        if self.expr_depth >= MAX_EXPRESSION_DEPTH {
            return Err(RuntimeError::ExpressionTooDeep { limit: MAX_EXPRESSION_DEPTH,
                                                         line:  expr.line_number(), });
        }
        self.expr_depth += 1;
        let value = self.evaluate_node(expr);
        self.expr_depth -= 1;
        value
    }

    fn evaluate_node(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(match value {
                NumberLiteral::Integer(i) => Value::Integer(*i),
                NumberLiteral::Float(f) => Value::Float(*f),
            }),
            Expr::String { value, .. } => Ok(Value::from(value.as_str())),
            Expr::Boolean { value, .. } => Ok(Value::Bool(*value)),
            Expr::Variable { name, line } => {
                self.lookup(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line)
            },
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::ListLiteral { elements, .. } => Ok(Value::list(self.evaluate_all(elements)?)),
            Expr::TupleLiteral { elements, .. } => Ok(Value::tuple(self.evaluate_all(elements)?)),
            Expr::SetLiteral { elements, line } => self.eval_set_literal(elements, *line),
            Expr::MapLiteral { entries, line } => self.eval_map_literal(entries, *line),
            Expr::Index { target, index, line } => self.eval_index(target, index, *line),
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
            Expr::AttributeAccess { target, name, line } => {
                self.eval_attribute(target, name, *line)
            },
            Expr::PostfixIncrement { name, line } => self.eval_postfix(name, 1, *line),
            Expr::PostfixDecrement { name, line } => self.eval_postfix(name, -1, *line),
            Expr::TuplePattern { line, .. } => {
                Err(RuntimeError::InvalidExpression { details: "A tuple pattern is only valid \
                                                                 as an assignment target"
                                                                                        .to_string(),
                                                      line:    *line, })
            },
        }
    }

    /// Evaluates `exprs` left to right.
    pub(crate) fn evaluate_all(&mut self, exprs: &[Expr]) -> EvalResult<Vec<Value>> {
        exprs.iter().map(|expr| self.evaluate(expr)).collect()
    }
}
