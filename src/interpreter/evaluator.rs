/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` struct, the `Flow` signal enum, the result type
/// aliases and the expression dispatch.
pub mod core;

/// The variable scope stack.
///
/// Provides `ScopeStack`, an ordered list of frames with innermost-first
/// lookup and a global frame that is never popped.
pub mod scope;

/// Statement execution.
///
/// Executes assignments, compound assignments, conditionals, function
/// definitions, `return`, `break`, `continue` and `import`.
pub mod statement;

/// Evaluation of `while` and `for` loops.
///
/// Consumes `break` and `continue` signals and scopes the loop variable to a
/// fresh frame per iteration.
pub mod loops;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, logical operators, sequence operators and
/// set difference.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, logical `not` and the postfix increment and
/// decrement operators.
pub mod unary;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking and
/// return values.
pub mod function;

/// Collection literals, indexing and attribute access.
pub mod collection;

/// Module loading.
///
/// Resolves `import` statements to files, runs each module once in an isolated
/// interpreter and caches its namespace.
pub mod module;

/// The `print` statement and the output sink it writes to.
pub mod output;

/// Utility functions for evaluation.
pub mod utils;
