/// Numeric helpers.
///
/// Conversions between host integer types and language integers, index
/// resolution for sequences, floor division and modulo with the sign rules of
/// the language, and float formatting.
pub mod num;
