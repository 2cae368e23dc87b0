use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Returns the kind of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>)
                                                       -> Option<TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map(|token| token.kind)
}

/// Builds the error for a missing construct.
///
/// If a token is available the error names it and its line, otherwise it
/// reports the end of input.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&Token>,
                                                 expected: impl Into<String>)
                                                 -> ParseError {
    let expected = expected.into();
    match found {
        Some(token) => {
            let found = match token.kind {
                TokenKind::NewLine => "end of line".to_string(),
                _ => token.text.clone(),
            };
            ParseError::UnexpectedToken { expected,
                                          found,
                                          line: token.line }
        },
        None => ParseError::UnexpectedEndOfInput { expected },
    }
}

/// Returns the nesting level one below `depth`.
///
/// # Errors
/// `NestingTooDeep`, reported at the next token, once `depth` reaches
/// [`MAX_NESTING_DEPTH`]. At the end of input the missing expression is
/// reported instead.
pub(in crate::interpreter::parser) fn descend<'a, I>(tokens: &mut Peekable<I>,
                                                     depth: usize)
                                                     -> ParseResult<usize>
    where I: Iterator<Item = &'a Token>
{
    if depth < MAX_NESTING_DEPTH {
        return Ok(depth + 1);
    }
    match tokens.peek() {
        Some(token) => Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                        line:  token.line, }),
        None => Err(unexpected(None, "expression")),
    }
}

/// Consumes the next token, which must be of kind `kind`.
///
/// # Errors
/// Returns an `UnexpectedToken` error naming `kind` if the next token differs,
/// or `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek().copied() {
        Some(token) if token.kind == kind => {
            tokens.next();
            Ok(token)
        },
        other => Err(unexpected(other, kind.to_string())),
    }
}

/// Parses a plain identifier and returns its name and line.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a Token>
{
    let token = expect(tokens, TokenKind::Ident)?;
    Ok((token.text.clone(), token.line))
}

/// Skips any number of newline tokens.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|token| token.kind == TokenKind::NewLine).is_some() {}
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma, to continue the list, or the closing token, to end it. A comma
/// directly before the closing token is accepted.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list (e.g. `]` or `)`).
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if tokens.next_if(|token| token.kind == closing).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek().copied() {
            Some(token) if token.kind == TokenKind::Comma => {
                tokens.next();
                if tokens.next_if(|token| token.kind == closing).is_some() {
                    break;
                }
            },
            Some(token) if token.kind == closing => {
                tokens.next();
                break;
            },
            other => return Err(unexpected(other, format!("',' or {closing}"))),
        }
    }
    Ok(items)
}
