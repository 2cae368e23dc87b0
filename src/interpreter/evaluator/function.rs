/// Function calls and the built-in table.
///
/// Defines `Builtin`, `Arity` and the `builtin_functions!` table, and
/// implements calls to user-defined functions with their scope frames.
pub mod core;

/// `range`, `len` and `sum`.
pub mod builtin;

/// `min` and `max` function implementations.
///
/// Return the smallest or largest element of one iterable argument, or of
/// several arguments.
pub mod min_max;
