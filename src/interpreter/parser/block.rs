use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_statement,
            utils::{descend, expect, parse_comma_separated, parse_identifier, skip_newlines},
        },
    },
};

/// Parses statements until one of `terminators` is found.
///
/// The terminator is consumed and returned alongside the body so callers can
/// tell `else` from `end`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the body.
/// - `block`: The kind of block, used in the error message.
/// - `line`: Line the block starts on.
/// - `terminators`: Token kinds that close the body.
/// - `depth`: Nesting level of the block statement; the body sits one deeper.
///
/// # Errors
/// - `UnterminatedBlock` if the input ends before a terminator.
/// - `NestingTooDeep` if blocks nest past the parser's limit.
fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                      block: &'static str,
                      line: usize,
                      terminators: &[TokenKind],
                      depth: usize)
                      -> ParseResult<(Vec<Statement>, TokenKind)>
    where I: Iterator<Item = &'a Token> + Clone
{
    let depth = descend(tokens, depth)?;
    let mut body = Vec::new();
    loop {
        skip_newlines(tokens);
        match tokens.peek().copied() {
            None => return Err(ParseError::UnterminatedBlock { block, line }),
            Some(token) if terminators.contains(&token.kind) => {
                tokens.next();
                return Ok((body, token.kind));
            },
            Some(_) => body.push(parse_statement(tokens, depth)?),
        }
    }
}

/// Parses an `if` statement with an optional `else` clause.
///
/// Syntax:
/// ```text
///     if <condition>
///         <statements>
///     [else
///         <statements>]
///     end
/// ```
/// Chained conditionals are written as a nested `if` inside the `else` body.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
/// - `depth`: Nesting level of the enclosing block.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                       line: usize,
                       depth: usize)
                       -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, depth)?;
    let (then_branch, terminator) =
        parse_block(tokens, "if", line, &[TokenKind::Else, TokenKind::End], depth)?;

    let else_branch = if terminator == TokenKind::Else {
        Some(parse_block(tokens, "if", line, &[TokenKind::End], depth)?.0)
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses a `while` loop: `while <condition> <statements> end`.
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                          line: usize,
                          depth: usize)
                          -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, depth)?;
    let (body, _) = parse_block(tokens, "while", line, &[TokenKind::End], depth)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses a `for` loop: `for <name> in <iterable> <statements> end`.
pub fn parse_for<'a, I>(tokens: &mut Peekable<I>,
                        line: usize,
                        depth: usize)
                        -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let (variable, _) = parse_identifier(tokens)?;
    expect(tokens, TokenKind::In)?;
    let iterable = parse_expression(tokens, depth)?;
    let (body, _) = parse_block(tokens, "for", line, &[TokenKind::End], depth)?;

    Ok(Statement::ForEach { variable,
                            iterable,
                            body,
                            line })
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     function <name>(<param>, ...)
///         <statements>
///     end
/// ```
/// Parameters are parsed as expressions and must each be a bare identifier.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `function` keyword.
/// - `line`: Line number of the `function` token.
/// - `depth`: Nesting level of the enclosing block.
///
/// # Errors
/// - `InvalidParameter` if a parameter is anything but an identifier.
/// - `UnterminatedBlock` if the body has no `end`.
pub fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                        line: usize,
                                        depth: usize)
                                        -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, TokenKind::LParen)?;

    let params = parse_comma_separated(tokens,
                                       |tokens| parse_expression(tokens, depth),
                                       TokenKind::RParen)?
        .into_iter()
        .map(|param| match param {
            Expr::Variable { name: param, .. } => Ok(param),
            other => Err(ParseError::InvalidParameter { function:  name.clone(),
                                                        parameter: other.to_string(),
                                                        line:      other.line_number(), }),
        })
        .collect::<ParseResult<Vec<_>>>()?;

    let (body, _) = parse_block(tokens, "function", line, &[TokenKind::End], depth)?;

    Ok(Statement::FunctionDef(Rc::new(FunctionDef { name,
                                                    params,
                                                    body,
                                                    line })))
}
