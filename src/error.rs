/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of
/// source code: unknown characters, unexpected tokens, unterminated blocks and
/// invalid assignment targets or parameters.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution: unknown
/// names, type mismatches, arity mismatches, missing keys, module loading
/// failures and control flow escaping its construct.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any fault raised while running source text: either the program could not
/// be derived from the source, or it failed while executing.
#[derive(Debug, Error)]
pub enum Error {
    /// The source is not a valid program.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// The program failed while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The source line the fault refers to, when known.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax(e) => e.line(),
            Self::Runtime(e) => Some(e.line()),
        }
    }
}
