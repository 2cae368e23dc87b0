use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::ParseError;

/// The closed set of token kinds recognized by the tokenizer.
///
/// Keywords are declared with `#[token]` so that, on a match of equal length,
/// they win over the identifier pattern; multi-character operators win over
/// their single-character prefixes by longest match.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Integer literal, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// Float literal, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    /// String literal delimited by double quotes; no escape processing.
    #[regex(r#""[^"]*""#, |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
    }, allow_greedy = true)]
    String,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `end`
    #[token("end")]
    End,
    /// `print`
    #[token("print")]
    Print,
    /// `import`
    #[token("import")]
    Import,
    /// `with`
    #[token("with")]
    With,
    /// `sep`
    #[token("sep")]
    Sep,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `**`
    #[token("**")]
    Power,
    /// `//`
    #[token("//")]
    IntDiv,
    /// `++=`
    #[token("++=")]
    PlusPlusEqual,
    /// `--=`
    #[token("--=")]
    MinusMinusEqual,
    /// `~~=`
    #[token("~~=")]
    TildeTildeEqual,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `~~`
    #[token("~~")]
    TildeTilde,
    /// `+=`
    #[token("+=")]
    PlusEqual,
    /// `-=`
    #[token("-=")]
    MinusEqual,
    /// `==`
    #[token("==")]
    EqEq,
    /// `!=`
    #[token("!=")]
    Neq,
    /// `>`
    #[token(">")]
    Gt,
    /// `<`
    #[token("<")]
    Lt,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `%`
    #[token("%")]
    Mod,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equal,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBrack,
    /// `]`
    #[token("]")]
    RBrack,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// Identifier, such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    /// Statement separator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// `# comments` up to the end of the line.
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs, carriage returns and form feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A classified lexical unit together with its source text and line.
///
/// For string literals `text` holds the contents without the surrounding
/// quotes; for every other kind it is the matched slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The token text.
    pub text: String,
    /// The line the token starts on, counting from 1.
    pub line: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }
}

impl TokenKind {
    /// Returns `true` if a token of this kind can end an operand, which means
    /// a `-` following it is a binary minus.
    #[must_use]
    pub const fn ends_operand(self) -> bool {
        matches!(self,
                 Self::Number
                 | Self::Float
                 | Self::String
                 | Self::Ident
                 | Self::True
                 | Self::False
                 | Self::RParen
                 | Self::RBrack
                 | Self::RBrace
                 | Self::PlusPlus
                 | Self::MinusMinus)
    }

    /// The canonical source spelling of a keyword, operator or structural
    /// token, or a descriptive name for literal classes.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Ident => "identifier",
            Self::NewLine => "newline",
            Self::Comment => "comment",
            Self::Ignored => "whitespace",
            Self::True => "true",
            Self::False => "false",
            Self::Function => "function",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::In => "in",
            Self::End => "end",
            Self::Print => "print",
            Self::Import => "import",
            Self::With => "with",
            Self::Sep => "sep",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Power => "**",
            Self::IntDiv => "//",
            Self::PlusPlusEqual => "++=",
            Self::MinusMinusEqual => "--=",
            Self::TildeTildeEqual => "~~=",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::TildeTilde => "~~",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::EqEq => "==",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Mod => "%",
            Self::Slash => "/",
            Self::Equal => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrack => "[",
            Self::RBrack => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Dot => ".",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.describe())
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// Whitespace and `#` comments are skipped, newlines become
/// [`TokenKind::NewLine`] tokens. A `-` written directly in front of a numeric
/// literal becomes part of that literal unless the preceding token ends an
/// operand, so `x = -1` holds a negative literal while `a-1` and `a -1` are
/// both subtractions.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for any character that starts
/// no token, including an unterminated string's opening quote.
///
/// # Example
/// ```
/// use quirk::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x = 5 + 3").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Ident, TokenKind::Equal, TokenKind::Number, TokenKind::Plus, TokenKind::Number]);
/// assert!(tokens.iter().all(|t| t.line == 1));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut raw = Vec::new();

    loop {
        let line = lexer.extras.line;
        let Some(kind) = lexer.next() else { break };
        let span = lexer.span();
        let Ok(kind) = kind else {
            let character = lexer.slice().chars().next().unwrap_or('\0');
            return Err(ParseError::UnexpectedCharacter { character, line });
        };
        raw.push((kind, span, line));
    }

    let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
    let mut iter = raw.into_iter().peekable();

    while let Some((kind, span, line)) = iter.next() {
        let slice = &source[span.clone()];

        if kind == TokenKind::Minus
           && !tokens.last().is_some_and(|prev| prev.kind.ends_operand())
           && let Some((next_kind, next_span, _)) = iter.peek()
           && matches!(next_kind, TokenKind::Number | TokenKind::Float)
           && next_span.start == span.end
        {
            let literal = format!("-{}", &source[next_span.clone()]);
            tokens.push(Token::new(*next_kind, literal, line));
            iter.next();
            continue;
        }

        let text = if kind == TokenKind::String {
            &slice[1..slice.len() - 1]
        } else {
            slice
        };
        tokens.push(Token::new(kind, text, line));
    }

    trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_win_over_identifiers() {
        assert_eq!(kinds("function functional end ending"),
                   [TokenKind::Function, TokenKind::Ident, TokenKind::End, TokenKind::Ident]);
    }

    #[test]
    fn multi_character_operators_win_over_prefixes() {
        assert_eq!(kinds("** // ++= --= ~~= ++ -- += -= == != ~~"),
                   [TokenKind::Power,
                    TokenKind::IntDiv,
                    TokenKind::PlusPlusEqual,
                    TokenKind::MinusMinusEqual,
                    TokenKind::TildeTildeEqual,
                    TokenKind::PlusPlus,
                    TokenKind::MinusMinus,
                    TokenKind::PlusEqual,
                    TokenKind::MinusEqual,
                    TokenKind::EqEq,
                    TokenKind::Neq,
                    TokenKind::TildeTilde]);
    }

    #[test]
    fn strings_drop_their_quotes() {
        let tokens = tokenize("\"hello world\"").unwrap();
        assert_eq!(tokens, [Token::new(TokenKind::String, "hello world", 1)]);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let tokens = tokenize("a # first\n\nb").unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| (t.kind, t.line)).collect();
        assert_eq!(lines,
                   [(TokenKind::Ident, 1),
                    (TokenKind::NewLine, 1),
                    (TokenKind::NewLine, 2),
                    (TokenKind::Ident, 3)]);
    }

    #[test]
    fn multi_line_strings_advance_the_line_counter() {
        let tokens = tokenize("\"a\nb\" c").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn negative_literals_only_without_preceding_operand() {
        assert_eq!(kinds("x = -1"), [TokenKind::Ident, TokenKind::Equal, TokenKind::Number]);
        assert_eq!(tokenize("f(-2.5)").unwrap()[2].text, "-2.5");
        assert_eq!(kinds("a-1"), [TokenKind::Ident, TokenKind::Minus, TokenKind::Number]);
        assert_eq!(kinds("a -1"), [TokenKind::Ident, TokenKind::Minus, TokenKind::Number]);
        assert_eq!(kinds("- 1"), [TokenKind::Minus, TokenKind::Number]);
    }

    #[test]
    fn float_and_integer_literals() {
        assert_eq!(kinds("1 1.5"), [TokenKind::Number, TokenKind::Float]);
    }

    #[test]
    fn unknown_characters_fail_with_line() {
        match tokenize("x = 1\ny = $") {
            Err(ParseError::UnexpectedCharacter { character, line }) => {
                assert_eq!(character, '$');
                assert_eq!(line, 2);
            },
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(tokenize("\"open").is_err());
    }
}
