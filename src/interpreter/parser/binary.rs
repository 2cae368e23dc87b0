use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            unary::{parse_negation, parse_not, parse_postfix},
            utils::descend,
        },
    },
};

/// Maps a token kind to the binary operator it denotes, if any.
const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::IntDiv => Some(BinaryOperator::IntDiv),
        TokenKind::Mod => Some(BinaryOperator::Mod),
        TokenKind::Power => Some(BinaryOperator::Pow),
        TokenKind::EqEq => Some(BinaryOperator::Equal),
        TokenKind::Neq => Some(BinaryOperator::NotEqual),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Consumes the next token if it is one of `operators` and returns the
/// operator together with the token's line.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        operators: &[BinaryOperator])
                        -> Option<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.peek()?;
    let op = token_to_binary_operator(token.kind).filter(|op| operators.contains(op))?;
    let line = token.line;
    tokens.next();
    Some((op, line))
}

/// Parses one left-associative precedence level.
///
/// Repeatedly applies `operand` and folds the results with any operator from
/// `operators` into a left-leaning `Expr::BinaryOp` tree. Each operator in
/// the chain deepens the tree, so each one counts as a nesting level.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 mut depth: usize,
                                 operators: &[BinaryOperator],
                                 operand: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = operand(tokens, depth)?;
    while let Some((op, line)) = next_operator(tokens, operators) {
        depth = descend(tokens, depth)?;
        let right = operand(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and ("or" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, depth, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := not ("and" not)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, depth, &[BinaryOperator::And], parse_not)
}

/// Parses comparisons.
///
/// Comparisons are left-associative, so `a < b < c` compares the boolean
/// result of `a < b` with `c`.
///
/// The rule is: `comparison := additive (("==" | "!=" | ">" | "<") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Equal,
                             BinaryOperator::NotEqual,
                             BinaryOperator::Greater,
                             BinaryOperator::Less],
                           parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := negation (("*" | "/" | "//" | "%")
/// negation)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Mul,
                             BinaryOperator::Div,
                             BinaryOperator::IntDiv,
                             BinaryOperator::Mod],
                           parse_negation)
}

/// Parses exponentiation.
///
/// `**` is left-associative: `2 ** 3 ** 2` is `(2 ** 3) ** 2`. A negated
/// right operand is accepted, so `2 ** -x` parses.
///
/// The rule is: `power := postfix ("**" (postfix | "-" negation))*`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_postfix(tokens, depth)?;
    while let Some((op, line)) = next_operator(tokens, &[BinaryOperator::Pow]) {
        depth = descend(tokens, depth)?;
        let right = match tokens.peek().map(|token| token.kind) {
            Some(TokenKind::Minus) => parse_negation(tokens, depth)?,
            _ => parse_postfix(tokens, depth)?,
        };
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}
