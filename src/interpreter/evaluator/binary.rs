/// Operator dispatch.
///
/// Routes a binary operator to the handler for its operand types.
pub mod core;

/// Numeric arithmetic with integer/float promotion.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// Concatenation and repetition of strings, lists and tuples.
pub mod sequence;

/// Equality and ordering.
pub mod comparison;

/// `and` and `or`.
pub mod logic;

/// Set difference.
pub mod set;
