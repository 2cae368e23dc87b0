use thiserror::Error;

/// Represents all errors that can occur during tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("Syntax error on line {line}: Unexpected character '{character}'")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Found a token other than the one the grammar requires.
    #[error("Syntax error on line {line}: Expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The text of the token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of the token stream while a construct was incomplete.
    #[error("Syntax error: Expected {expected} but reached end of file")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
    },
    /// A block-carrying statement has no matching `end`.
    #[error("Syntax error on line {line}: Missing 'end' for {block}")]
    UnterminatedBlock {
        /// The kind of block (`function`, `if`, `while`, `for`).
        block: &'static str,
        /// The line the block starts on.
        line:  usize,
    },
    /// The left-hand side of an assignment is not a variable or a tuple of
    /// variables.
    #[error("Syntax error on line {line}: Invalid assignment target")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function parameter is not a plain identifier.
    #[error("Syntax error on line {line}: Parameter '{parameter}' of function '{function}' must be an identifier")]
    InvalidParameter {
        /// The function being defined.
        function:  String,
        /// The parameter as written.
        parameter: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A numeric literal that does not fit the language's number types.
    #[error("Syntax error on line {line}: Invalid numeric literal '{literal}'")]
    InvalidLiteral {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Expressions or blocks nested deeper than the parser allows.
    #[error("Syntax error on line {line}: Nesting deeper than {limit} levels")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// The source line of the error, or `None` if the input ended early.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEndOfInput { .. } => None,
            Self::UnexpectedCharacter { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnterminatedBlock { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::InvalidParameter { line, .. }
            | Self::InvalidLiteral { line, .. }
            | Self::NestingTooDeep { line, .. } => Some(*line),
        }
    }
}
