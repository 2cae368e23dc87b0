//! # quirk
//!
//! quirk is the tokenizer, parser and tree-walking interpreter of the Quirk
//! scripting language: a small, dynamically typed language with functions,
//! lists, tuples, sets, mappings and file-based modules.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser,
/// executed by the evaluator and printed back as source by its `Display`
/// implementations.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches the source line to every node for error reporting.
pub mod ast;
/// Interpreter configuration.
///
/// Holds the module search path and module file extension shared by an
/// interpreter and every module interpreter it spawns.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during tokenizing,
/// parsing or executing code. Every error carries the source line it refers
/// to and renders as a one-line diagnostic.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser, evaluator,
///   module loader).
/// - Wraps errors from imported modules with the module name.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokenizing, parsing, evaluation and value
/// representations to provide a complete runtime for Quirk programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Diagnostics setup for the command line front end.
pub mod logging;
/// General utilities for safe numeric conversion and helpers.
///
/// These include conversions between integer and floating-point types, index
/// resolution and the floor-rounding division the language uses.
pub mod util;

pub use interpreter::{evaluator::core::Interpreter, lexer::tokenize};

use crate::{ast::Program, error::ParseError, interpreter::parser::core::Parser};

/// Tokenizes and parses `source` into a [`Program`].
///
/// # Errors
/// Returns the first syntax error in `source`.
///
/// # Examples
/// ```
/// use quirk::parse;
///
/// let program = parse("function add(a, b)\nreturn a + b\nend").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// assert!(parse("if x > 1\nprint x").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    Parser::new(tokens).parse()
}

/// Runs `source` in a fresh interpreter that prints to stdout.
///
/// Modules are looked up on the search path of
/// [`InterpreterConfig::from_env`](config::InterpreterConfig::from_env).
///
/// # Errors
/// Returns the syntax error or the first runtime fault, if any.
///
/// # Examples
/// ```
/// use quirk::run_source;
///
/// // The program runs to completion.
/// assert!(run_source("x = 2 ** 10\nprint x").is_ok());
///
/// // `y` is never defined.
/// let err = run_source("x = 1\nprint y").unwrap_err();
/// assert_eq!(err.line(), Some(2));
/// ```
pub fn run_source(source: &str) -> Result<(), error::Error> {
    Interpreter::with_config(config::InterpreterConfig::from_env()).run_source(source)
}
