//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it came from,
//! an optional decoded [`Literal`], and its position.

use std::fmt;

use lazy_static::lazy_static;
use loxc_util::Span;
use rustc_hash::FxHashMap;

/// Every kind of token the lexer can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    /// A name that is not a reserved word.
    Identifier,
    /// A double-quoted string; may span lines.
    String,
    /// Digits with an optional fractional part.
    Number,

    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input. Always the last token, exactly once.
    Eof,
}

impl TokenKind {
    /// The conventional upper-case name, e.g. `BANG_EQUAL`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    /// Reserved spellings and their token kinds.
    static ref KEYWORDS: FxHashMap<&'static str, TokenKind> = {
        let mut keywords = FxHashMap::default();
        keywords.insert("and", TokenKind::And);
        keywords.insert("class", TokenKind::Class);
        keywords.insert("else", TokenKind::Else);
        keywords.insert("false", TokenKind::False);
        keywords.insert("for", TokenKind::For);
        keywords.insert("fun", TokenKind::Fun);
        keywords.insert("if", TokenKind::If);
        keywords.insert("nil", TokenKind::Nil);
        keywords.insert("or", TokenKind::Or);
        keywords.insert("print", TokenKind::Print);
        keywords.insert("return", TokenKind::Return);
        keywords.insert("super", TokenKind::Super);
        keywords.insert("this", TokenKind::This);
        keywords.insert("true", TokenKind::True);
        keywords.insert("var", TokenKind::Var);
        keywords.insert("while", TokenKind::While);
        keywords
    };
}

/// Look up a reserved word. Case-sensitive, exact spelling.
///
/// # Example
///
/// ```
/// use loxc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

/// All reserved spellings.
pub fn keywords() -> impl Iterator<Item = &'static str> {
    KEYWORDS.keys().copied()
}

/// A decoded literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Number literal; every Lox number is a double.
    Number(f64),
    /// String literal contents, without the quotes.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the fractional part: 10.0 rather than 10
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// A classified, positioned fragment of source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// Exact source text of the token; empty for `Eof`
    pub lexeme: String,
    /// Decoded value for string and number tokens
    pub literal: Option<Literal>,
    /// Line counter at the moment the token was emitted (1-based)
    pub line: u32,
    /// Byte range of the lexeme, with the line and column it starts at
    pub span: Span,
}

impl Token {
    /// Create a token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The end-of-input sentinel at `offset`, on `line`.
    pub fn eof(offset: usize, line: u32, column: u32) -> Self {
        Self::new(
            TokenKind::Eof,
            "",
            None,
            line,
            Span::new(offset, offset, line, column),
        )
    }

    /// Whether this is the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Numeric value, if this is a number token.
    pub fn as_number(&self) -> Option<f64> {
        match self.literal {
            Some(Literal::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// String contents, if this is a string token.
    pub fn as_str(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    /// `KIND lexeme literal`, with `null` for a missing literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{}", literal),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sixteen_keywords() {
        let expected = [
            ("and", TokenKind::And),
            ("class", TokenKind::Class),
            ("else", TokenKind::Else),
            ("false", TokenKind::False),
            ("for", TokenKind::For),
            ("fun", TokenKind::Fun),
            ("if", TokenKind::If),
            ("nil", TokenKind::Nil),
            ("or", TokenKind::Or),
            ("print", TokenKind::Print),
            ("return", TokenKind::Return),
            ("super", TokenKind::Super),
            ("this", TokenKind::This),
            ("true", TokenKind::True),
            ("var", TokenKind::Var),
            ("while", TokenKind::While),
        ];
        assert_eq!(keywords().count(), expected.len());
        for (spelling, kind) in expected {
            assert_eq!(keyword_from_ident(spelling), Some(kind), "{}", spelling);
        }
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(keyword_from_ident("VAR"), None);
        assert_eq!(keyword_from_ident("Nil"), None);
        assert_eq!(keyword_from_ident("variable"), None);
        assert_eq!(keyword_from_ident(""), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenKind::LeftParen.name(), "LEFT_PAREN");
        assert_eq!(TokenKind::Eof.name(), "EOF");
    }

    #[test]
    fn test_token_display() {
        let number = Token::new(
            TokenKind::Number,
            "10",
            Some(Literal::Number(10.0)),
            1,
            Span::new(8, 10, 1, 9),
        );
        assert_eq!(number.to_string(), "NUMBER 10 10.0");

        let semicolon = Token::new(TokenKind::Semicolon, ";", None, 1, Span::new(10, 11, 1, 11));
        assert_eq!(semicolon.to_string(), "SEMICOLON ; null");
    }

    #[test]
    fn test_literal_accessors() {
        let s = Token::new(
            TokenKind::String,
            "\"hi\"",
            Some(Literal::String("hi".to_string())),
            1,
            Span::new(0, 4, 1, 1),
        );
        assert_eq!(s.as_str(), Some("hi"));
        assert_eq!(s.as_number(), None);
    }

    #[test]
    fn test_eof_token() {
        let eof = Token::eof(12, 3, 1);
        assert!(eof.is_eof());
        assert!(eof.lexeme.is_empty());
        assert_eq!(eof.line, 3);
        assert!(eof.span.is_empty());
    }
}
