use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_logical_or,
            statement::parse_statement,
            utils::{descend, skip_newlines},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of expressions and blocks the parser accepts.
///
/// Every parenthesis, bracket, brace, prefix operator, block body and chained
/// binary or postfix operator counts as one level, so this also bounds the
/// depth of every syntax tree the parser produces.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Recursive-descent parser over a token sequence.
///
/// The parser owns its tokens; [`Parser::parse`] is a pure function of them
/// and may be called any number of times.
///
/// # Example
/// ```
/// use quirk::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::Parser},
/// };
///
/// let tokens = tokenize("x = 5 + 3\nprint x").unwrap();
/// let program = Parser::new(tokens).parse().unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// assert!(matches!(program.statements[1], Statement::Print { line: 2, .. }));
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    /// Creates a parser for `tokens`.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parses the whole token sequence into a [`Program`].
    ///
    /// # Errors
    /// Returns the first syntax error encountered.
    pub fn parse(&self) -> ParseResult<Program> {
        parse_program(&mut self.tokens.iter().peekable())
    }
}

/// Parses statements until the token stream is exhausted.
///
/// Grammar: `program := (NEWLINE* statement)* NEWLINE*`
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();
    loop {
        skip_newlines(tokens);
        if tokens.peek().is_none() {
            break;
        }
        statements.push(parse_statement(tokens, 0)?);
    }
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// `depth` is the nesting level of the surrounding construct; the expression
/// itself sits one level deeper.
///
/// Grammar: `expression := logical_or`
///
/// # Errors
/// `NestingTooDeep` once the nesting passes [`MAX_NESTING_DEPTH`], plus any
/// error of the sub-expressions.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let depth = descend(tokens, depth)?;
    parse_logical_or(tokens, depth)
}
