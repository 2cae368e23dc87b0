use std::iter::Peekable;

use crate::{
    ast::{CompoundOperator, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{parse_for, parse_function_definition, parse_if, parse_while},
            core::{ParseResult, parse_expression},
            utils::{parse_identifier, peek_kind, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// Dispatch is on the leading token: `import`, `print`, `function`, `if`,
/// `while`, `for`, `return`, `break` and `continue` each start their own
/// statement form. Anything else is parsed as an expression which becomes an
/// assignment if an assignment operator follows it.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the statement.
/// - `depth`: Nesting level of the enclosing block, `0` at the top level.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        return Err(unexpected(None, "statement"));
    };
    let line = token.line;

    match token.kind {
        TokenKind::Import => {
            tokens.next();
            let (module, _) = parse_identifier(tokens)?;
            Ok(Statement::Import { module, line })
        },
        TokenKind::Print => {
            tokens.next();
            parse_print(tokens, line, depth)
        },
        TokenKind::Function => {
            tokens.next();
            parse_function_definition(tokens, line, depth)
        },
        TokenKind::If => {
            tokens.next();
            parse_if(tokens, line, depth)
        },
        TokenKind::While => {
            tokens.next();
            parse_while(tokens, line, depth)
        },
        TokenKind::For => {
            tokens.next();
            parse_for(tokens, line, depth)
        },
        TokenKind::Return => {
            tokens.next();
            let value = if ends_clause(peek_kind(tokens)) {
                None
            } else {
                Some(parse_expression(tokens, depth)?)
            };
            Ok(Statement::Return { value, line })
        },
        TokenKind::Break => {
            tokens.next();
            Ok(Statement::Break { line })
        },
        TokenKind::Continue => {
            tokens.next();
            Ok(Statement::Continue { line })
        },
        _ => parse_assignment_or_expression(tokens, depth),
    }
}

/// Returns `true` if the next token cannot start an expression operand of a
/// `return` or `print`, i.e. the clause has no further values.
const fn ends_clause(kind: Option<TokenKind>) -> bool {
    matches!(kind,
             None | Some(TokenKind::NewLine | TokenKind::End | TokenKind::Else | TokenKind::With))
}

/// Parses the remainder of a `print` statement.
///
/// Syntax:
/// ```text
///     print <expr> ("," <expr>)* [with (sep <expr> | end <expr>)+]
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `print` keyword.
/// - `line`: Line number of the `print` token.
/// - `depth`: Nesting level of the enclosing block.
///
/// # Errors
/// - `UnexpectedToken` if `with` is not followed by `sep` or `end`.
/// - Propagates any errors from sub-expression parsing.
fn parse_print<'a, I>(tokens: &mut Peekable<I>,
                      line: usize,
                      depth: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut values = Vec::new();
    if !ends_clause(peek_kind(tokens)) {
        values.push(parse_expression(tokens, depth)?);
        while tokens.next_if(|token| token.kind == TokenKind::Comma).is_some() {
            values.push(parse_expression(tokens, depth)?);
        }
    }

    let mut sep = None;
    let mut end = None;
    if tokens.next_if(|token| token.kind == TokenKind::With).is_some() {
        loop {
            match peek_kind(tokens) {
                Some(TokenKind::Sep) => {
                    tokens.next();
                    sep = Some(parse_expression(tokens, depth)?);
                },
                Some(TokenKind::End) => {
                    tokens.next();
                    end = Some(parse_expression(tokens, depth)?);
                },
                _ => break,
            }
        }
        if sep.is_none() && end.is_none() {
            return Err(unexpected(tokens.peek().copied(), "'sep' or 'end' after 'with'"));
        }
    }

    Ok(Statement::Print { values,
                          sep,
                          end,
                          line })
}

/// Parses an expression statement, an assignment or a compound assignment.
///
/// The left-hand side is parsed as an ordinary expression first; if an
/// assignment operator follows, it is converted to an assignment target.
///
/// # Errors
/// `InvalidAssignmentTarget` when the left-hand side is neither a variable
/// nor, for plain `=`, a parenthesized list of variables.
fn parse_assignment_or_expression<'a, I>(tokens: &mut Peekable<I>,
                                         depth: usize)
                                         -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens, depth)?;
    let line = expr.line_number();

    let compound = match peek_kind(tokens) {
        Some(TokenKind::Equal) => {
            tokens.next();
            let target = into_assignment_target(expr)?;
            let value = parse_expression(tokens, depth)?;
            return Ok(Statement::Assign { target,
                                          value,
                                          line });
        },
        Some(TokenKind::PlusEqual) => CompoundOperator::Add,
        Some(TokenKind::MinusEqual) => CompoundOperator::Sub,
        Some(TokenKind::PlusPlusEqual) => CompoundOperator::Union,
        Some(TokenKind::MinusMinusEqual) => CompoundOperator::Difference,
        Some(TokenKind::TildeTildeEqual) => CompoundOperator::SymmetricDifference,
        _ => return Ok(Statement::Expression { expr, line }),
    };
    tokens.next();

    let Expr::Variable { name, .. } = expr else {
        return Err(ParseError::InvalidAssignmentTarget { line });
    };
    let value = parse_expression(tokens, depth)?;

    Ok(Statement::CompoundAssign { name,
                                   op: compound,
                                   value,
                                   line })
}

/// Converts the left-hand side of `=` into an assignment target.
///
/// A variable stays a variable; a tuple literal whose elements are all
/// variables becomes a [`Expr::TuplePattern`].
fn into_assignment_target(expr: Expr) -> ParseResult<Expr> {
    match expr {
        Expr::Variable { .. } => Ok(expr),
        Expr::TupleLiteral { elements, line } => {
            let names = elements.into_iter()
                                .map(|element| match element {
                                    Expr::Variable { name, .. } => Ok(name),
                                    _ => Err(ParseError::InvalidAssignmentTarget { line }),
                                })
                                .collect::<ParseResult<Vec<_>>>()?;
            Ok(Expr::TuplePattern { names, line })
        },
        other => Err(ParseError::InvalidAssignmentTarget { line: other.line_number() }),
    }
}
