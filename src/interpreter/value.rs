/// The runtime value type.
///
/// Defines the `Value` enum with scalar, collection, function and module
/// variants, together with truthiness, equality and iteration.
pub mod core;

/// Hashable keys.
///
/// Defines `Key`, the immutable form of a value used for set elements and
/// mapping keys. Keys are totally ordered so that sets and mappings iterate
/// and print deterministically.
pub mod key;

/// Value formatting.
///
/// Implements `Display` for values in the language's own literal syntax, plus
/// the quoted form used for elements inside containers.
pub mod display;
