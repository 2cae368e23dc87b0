use std::iter::Peekable;

use crate::{
    ast::{Expr, NumberLiteral, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::{parse_comparison, parse_power},
            core::{ParseResult, parse_expression},
            utils::{descend, expect, parse_comma_separated, parse_identifier, peek_kind, unexpected},
        },
    },
};

/// Parses logical negation.
///
/// `not` binds looser than comparisons, so `not a == b` negates the
/// comparison.
///
/// The rule is: `not := "not" not | comparison`
pub fn parse_not<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.next_if(|token| token.kind == TokenKind::Not) {
        let depth = descend(tokens, depth)?;
        let operand = parse_not(tokens, depth)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Not,
                                  expr: Box::new(operand),
                                  line: token.line, });
    }
    parse_comparison(tokens, depth)
}

/// Parses arithmetic negation.
///
/// A `-` written directly against a number is folded into the literal by the
/// tokenizer; this level handles every other prefix minus, such as `-x` or
/// `- 3`.
///
/// The rule is: `negation := "-" negation | power`
pub fn parse_negation<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.next_if(|token| token.kind == TokenKind::Minus) {
        let depth = descend(tokens, depth)?;
        let operand = parse_negation(tokens, depth)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(operand),
                                  line: token.line, });
    }
    parse_power(tokens, depth)
}

/// Parses a primary expression followed by any chain of postfix forms.
///
/// Postfix forms are calls `(args)`, indexing `[expr]`, attribute access
/// `.name`, and `++` / `--` on a bare variable.
///
/// # Errors
/// `InvalidAssignmentTarget` if `++` or `--` follows anything but a variable.
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut expr = parse_primary(tokens, depth)?;

    loop {
        let line = expr.line_number();
        if matches!(peek_kind(tokens),
                    Some(TokenKind::LParen | TokenKind::LBrack | TokenKind::Dot))
        {
            depth = descend(tokens, depth)?;
        }
        expr = match peek_kind(tokens) {
            Some(TokenKind::LParen) => {
                tokens.next();
                let arguments = parse_comma_separated(tokens,
                                                      |tokens| parse_expression(tokens, depth),
                                                      TokenKind::RParen)?;
                Expr::Call { callee: Box::new(expr),
                             arguments,
                             line }
            },
            Some(TokenKind::LBrack) => {
                tokens.next();
                let index = parse_expression(tokens, depth)?;
                expect(tokens, TokenKind::RBrack)?;
                Expr::Index { target: Box::new(expr),
                              index: Box::new(index),
                              line }
            },
            Some(TokenKind::Dot) => {
                tokens.next();
                let (name, _) = parse_identifier(tokens)?;
                Expr::AttributeAccess { target: Box::new(expr),
                                        name,
                                        line }
            },
            Some(kind @ (TokenKind::PlusPlus | TokenKind::MinusMinus)) => {
                let Expr::Variable { name, .. } = expr else {
                    return Err(ParseError::InvalidAssignmentTarget { line });
                };
                tokens.next();
                if kind == TokenKind::PlusPlus {
                    Expr::PostfixIncrement { name, line }
                } else {
                    Expr::PostfixDecrement { name, line }
                }
            },
            _ => return Ok(expr),
        };
    }
}

/// Parses a primary expression: a literal, a variable, a parenthesized
/// expression or tuple, a list literal, or a set or mapping literal.
///
/// # Errors
/// - `InvalidLiteral` if an integer literal does not fit in 64 bits.
/// - `UnexpectedToken` if no expression starts at the current token.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.next() else {
        return Err(unexpected(None, "expression"));
    };
    let line = token.line;

    match token.kind {
        TokenKind::Number => {
            let value = token.text
                             .parse::<i64>()
                             .map_err(|_| ParseError::InvalidLiteral { literal: token.text.clone(),
                                                                       line })?;
            Ok(Expr::Number { value: NumberLiteral::Integer(value),
                              line })
        },
        TokenKind::Float => {
            let value = token.text
                             .parse::<f64>()
                             .map_err(|_| ParseError::InvalidLiteral { literal: token.text.clone(),
                                                                       line })?;
            Ok(Expr::Number { value: NumberLiteral::Float(value),
                              line })
        },
        TokenKind::String => Ok(Expr::String { value: token.text.clone(),
                                               line }),
        TokenKind::True => Ok(Expr::Boolean { value: true,
                                              line }),
        TokenKind::False => Ok(Expr::Boolean { value: false,
                                               line }),
        TokenKind::Ident => Ok(Expr::Variable { name: token.text.clone(),
                                                line }),
        TokenKind::LParen => parse_group_or_tuple(tokens, line, depth),
        TokenKind::LBrack => {
            let elements = parse_comma_separated(tokens,
                                                 |tokens| parse_expression(tokens, depth),
                                                 TokenKind::RBrack)?;
            Ok(Expr::ListLiteral { elements, line })
        },
        TokenKind::LBrace => parse_map_or_set(tokens, line, depth),
        _ => Err(unexpected(Some(token), "expression")),
    }
}

/// Parses the rest of a parenthesized form after `(`.
///
/// `()` is the empty tuple, `(x)` a grouped expression, and `(x,)` or
/// `(x, y, ...)` a tuple literal.
fn parse_group_or_tuple<'a, I>(tokens: &mut Peekable<I>,
                               line: usize,
                               depth: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if tokens.next_if(|token| token.kind == TokenKind::RParen).is_some() {
        return Ok(Expr::TupleLiteral { elements: Vec::new(),
                                       line });
    }

    let first = parse_expression(tokens, depth)?;
    if tokens.next_if(|token| token.kind == TokenKind::Comma).is_none() {
        expect(tokens, TokenKind::RParen)?;
        return Ok(first);
    }

    let mut elements = vec![first];
    elements.extend(parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, depth),
                                          TokenKind::RParen)?);
    Ok(Expr::TupleLiteral { elements, line })
}

/// Parses the rest of a brace-delimited literal after `{`.
///
/// `{}` is an empty mapping. If the first element is followed by `:` the
/// literal is a mapping of `key: value` pairs, otherwise it is a set. A
/// trailing comma is accepted in both.
fn parse_map_or_set<'a, I>(tokens: &mut Peekable<I>,
                           line: usize,
                           depth: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if tokens.next_if(|token| token.kind == TokenKind::RBrace).is_some() {
        return Ok(Expr::MapLiteral { entries: Vec::new(),
                                     line });
    }

    let first = parse_expression(tokens, depth)?;
    if tokens.next_if(|token| token.kind == TokenKind::Colon).is_none() {
        let mut elements = vec![first];
        if tokens.next_if(|token| token.kind == TokenKind::Comma).is_some() {
            elements.extend(parse_comma_separated(tokens,
                                                  |tokens| parse_expression(tokens, depth),
                                                  TokenKind::RBrace)?);
        } else {
            expect(tokens, TokenKind::RBrace)?;
        }
        return Ok(Expr::SetLiteral { elements, line });
    }

    let mut entries = vec![(first, parse_expression(tokens, depth)?)];
    if tokens.next_if(|token| token.kind == TokenKind::Comma).is_some() {
        entries.extend(parse_comma_separated(tokens,
                                             |tokens| parse_map_entry(tokens, depth),
                                             TokenKind::RBrace)?);
    } else {
        expect(tokens, TokenKind::RBrace)?;
    }
    Ok(Expr::MapLiteral { entries, line })
}

/// Parses one `key: value` pair of a mapping literal.
fn parse_map_entry<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<(Expr, Expr)>
    where I: Iterator<Item = &'a Token> + Clone
{
    let key = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::Colon)?;
    let value = parse_expression(tokens, depth)?;
    Ok((key, value))
}
