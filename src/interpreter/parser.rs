/// Parser entry points and shared result type.
///
/// Holds [`core::Parser`], the program-level loop and the expression entry
/// point that starts the precedence descent.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the leading token of a statement and handles `print`,
/// `import`, `return`, `break`, `continue`, assignments and expression
/// statements.
pub mod statement;

/// Block-carrying statements.
///
/// Parses `if`/`else`, `while`, `for` and `function`, each of which collects
/// statements up to a matching `end`.
pub mod block;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// exponentiation.
pub mod binary;

/// Unary, postfix and primary parsing.
///
/// Handles `not`, prefix `-`, call/index/attribute chains, postfix `++`/`--`
/// and all literal forms.
pub mod unary;

/// Shared parser helpers such as token expectations and comma-separated
/// lists.
pub mod utils;
