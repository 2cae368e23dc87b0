use thiserror::Error;

use crate::error::ParseError;

/// Represents all errors that can occur during execution.
///
/// Every variant carries the line of the statement or expression that
/// triggered it.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    #[error("Runtime error on line {line}: Undefined variable '{name}'")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not a function.
    #[error("Runtime error on line {line}: Value of type '{type_name}' is not callable")]
    NotCallable {
        /// The type of the called value.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A function received the wrong number of arguments.
    #[error("Runtime error on line {line}: Function '{function}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        /// The function name.
        function: String,
        /// A description of the accepted argument counts.
        expected: String,
        /// The number of arguments passed.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Runtime error on line {line}: {details}")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Division or modulo by zero.
    #[error("Runtime error on line {line}: Division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Runtime error on line {line}: Integer overflow in '{operation}'")]
    IntegerOverflow {
        /// The overflowing operation.
        operation: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Sequence index outside the sequence.
    #[error("Runtime error on line {line}: Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index used.
        index: i64,
        /// The length of the sequence.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A mapping lookup with a key that is not present.
    #[error("Runtime error on line {line}: Key {key} not found")]
    KeyNotFound {
        /// The rendered key.
        key:  String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An attribute lookup with a name that is not present.
    #[error("Runtime error on line {line}: '{type_name}' has no attribute '{name}'")]
    AttributeNotFound {
        /// The attribute name.
        name:      String,
        /// The type (or module name) the attribute was looked up on.
        type_name: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A value that cannot be a set element or mapping key.
    #[error("Runtime error on line {line}: Unhashable type '{type_name}'")]
    Unhashable {
        /// The type of the value.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Tuple assignment from a value that is not a tuple.
    #[error("Runtime error on line {line}: Tuple assignment requires a tuple, got '{type_name}'")]
    TupleAssignmentType {
        /// The type of the assigned value.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Tuple assignment with a pattern and a tuple of different arity.
    #[error("Runtime error on line {line}: Tuple length mismatch: expected {expected} values, got {found}")]
    TupleLengthMismatch {
        /// The number of names in the pattern.
        expected: usize,
        /// The number of elements in the tuple.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression form that cannot produce a value, such as a tuple
    /// pattern outside an assignment.
    #[error("Runtime error on line {line}: {details}")]
    InvalidExpression {
        /// What went wrong.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Function calls nested deeper than the interpreter allows.
    #[error("Runtime error on line {line}: Maximum call depth of {limit} exceeded")]
    RecursionLimit {
        /// The maximum call depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An expression tree nested deeper than the evaluator allows.
    #[error("Runtime error on line {line}: Expression nested deeper than {limit} levels")]
    ExpressionTooDeep {
        /// The maximum expression depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `break` outside of any loop.
    #[error("Runtime error on line {line}: 'break' outside loop")]
    BreakOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `continue` outside of any loop.
    #[error("Runtime error on line {line}: 'continue' outside loop")]
    ContinueOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `return` outside of any function.
    #[error("Runtime error on line {line}: 'return' outside function")]
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A built-in received an argument it cannot work with.
    #[error("Runtime error on line {line}: {function}(): {details}")]
    InvalidArgument {
        /// The built-in name.
        function: &'static str,
        /// Why the argument is invalid.
        details:  String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No file for the module exists on the search path.
    #[error("Runtime error on line {line}: Module '{module}' not found")]
    ModuleNotFound {
        /// The module name.
        module: String,
        /// The line of the import.
        line:   usize,
    },
    /// A module imports itself, directly or through other modules.
    #[error("Runtime error on line {line}: Circular import of module '{module}'")]
    CircularImport {
        /// The module name.
        module: String,
        /// The line of the import.
        line:   usize,
    },
    /// The module file could not be read.
    #[error("Runtime error on line {line}: Failed to read module '{module}': {source}")]
    ModuleIo {
        /// The module name.
        module: String,
        /// The underlying I/O error.
        source: std::io::Error,
        /// The line of the import.
        line:   usize,
    },
    /// The module file is not a valid program.
    #[error("Runtime error on line {line}: In module '{module}': {source}")]
    ModuleSyntax {
        /// The module name.
        module: String,
        /// The syntax error inside the module.
        source: ParseError,
        /// The line of the import.
        line:   usize,
    },
    /// Executing the module failed.
    #[error("Runtime error on line {line}: In module '{module}': {source}")]
    ModuleFailed {
        /// The module name.
        module: String,
        /// The runtime error inside the module.
        source: Box<Self>,
        /// The line of the import.
        line:   usize,
    },
    /// Writing program output failed.
    #[error("Runtime error on line {line}: Failed to write output: {source}")]
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// The source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::NotCallable { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line }
            | Self::IntegerOverflow { line, .. }
            | Self::IndexOutOfRange { line, .. }
            | Self::KeyNotFound { line, .. }
            | Self::AttributeNotFound { line, .. }
            | Self::Unhashable { line, .. }
            | Self::TupleAssignmentType { line, .. }
            | Self::TupleLengthMismatch { line, .. }
            | Self::InvalidExpression { line, .. }
            | Self::RecursionLimit { line, .. }
            | Self::ExpressionTooDeep { line, .. }
            | Self::BreakOutsideLoop { line }
            | Self::ContinueOutsideLoop { line }
            | Self::ReturnOutsideFunction { line }
            | Self::InvalidArgument { line, .. }
            | Self::ModuleNotFound { line, .. }
            | Self::CircularImport { line, .. }
            | Self::ModuleIo { line, .. }
            | Self::ModuleSyntax { line, .. }
            | Self::ModuleFailed { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}
