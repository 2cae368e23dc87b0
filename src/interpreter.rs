/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions, executes statements,
/// manages the scope stack and loads modules. It is the core execution engine
/// of the interpreter.
///
/// # Responsibilities
/// - Evaluates every expression and statement form.
/// - Propagates `return`, `break` and `continue` as control signals, separate
///   from faults.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a number, string, identifier, keyword, operator, delimiter
/// or line break. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   source line.
/// - Skips whitespace and comments.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a `Program` by recursive descent, one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates the grammar, reporting errors with the offending line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values programs compute with: numbers, strings,
/// booleans, `none`, lists, tuples, sets, mappings, functions and module
/// namespaces.
pub mod value;
