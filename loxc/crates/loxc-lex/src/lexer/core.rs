//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the scan loop and the
//! single-character dispatch.

use loxc_util::{DiagnosticBuilder, Reporter, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

/// Outcome of scanning one token.
///
/// `Ok(Some(token))` emits a token, `Ok(None)` means the input was consumed
/// without producing one (whitespace, comments), and `Err` carries an error
/// for the scan loop to report.
pub(crate) type Scan = Result<Option<Token>, LexError>;

/// Lexer for Lox source code.
///
/// Runs once over an in-memory buffer and produces the complete token
/// sequence. Problems in the source are handed to the [`Reporter`] and
/// never stop the scan.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error sink for lexical errors.
    reporter: &'a mut dyn Reporter,

    /// Tokens emitted so far.
    tokens: Vec<Token>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,

    /// Number of errors reported during this scan.
    error_count: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            cursor: Cursor::new(source),
            reporter,
            tokens: Vec::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            error_count: 0,
        }
    }

    /// Scans the whole source.
    ///
    /// The result always ends with exactly one [`TokenKind::Eof`] token
    /// carrying the line the scan stopped on.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::{Lexer, TokenKind};
    /// use loxc_util::Handler;
    ///
    /// let mut handler = Handler::new();
    /// let tokens = Lexer::new("print 1;", &mut handler).scan_tokens();
    ///
    /// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     [TokenKind::Print, TokenKind::Number, TokenKind::Semicolon, TokenKind::Eof]
    /// );
    /// assert!(!handler.has_errors());
    /// ```
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            self.begin_token();
            match self.scan_token() {
                Ok(Some(token)) => self.tokens.push(token),
                Ok(None) => {},
                Err(error) => self.report_error(error),
            }
        }

        self.tokens.push(Token::eof(
            self.cursor.position(),
            self.cursor.line(),
            self.cursor.column(),
        ));

        debug!(
            bytes = self.cursor.source().len(),
            tokens = self.tokens.len(),
            errors = self.error_count,
            lines = self.cursor.line(),
            "scan finished"
        );

        self.tokens
    }

    /// Marks the current position as the start of the next token.
    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Consumes one token's worth of input, dispatching on its first
    /// character.
    fn scan_token(&mut self) -> Scan {
        let c = self.cursor.advance();

        match c {
            '(' => self.emit(TokenKind::LeftParen),
            ')' => self.emit(TokenKind::RightParen),
            '{' => self.emit(TokenKind::LeftBrace),
            '}' => self.emit(TokenKind::RightBrace),
            ',' => self.emit(TokenKind::Comma),
            '.' => self.emit(TokenKind::Dot),
            '-' => self.emit(TokenKind::Minus),
            '+' => self.emit(TokenKind::Plus),
            ';' => self.emit(TokenKind::Semicolon),
            '*' => self.emit(TokenKind::Star),
            '!' | '=' | '<' | '>' => self.lex_comparison(c),
            '/' => self.lex_slash(),
            // The cursor counts the newline itself.
            ' ' | '\r' | '\t' | '\n' => Ok(None),
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if super::identifier::is_ident_start(c) => self.lex_identifier(),
            c => Err(LexError::UnexpectedCharacter(c)),
        }
    }

    /// Source text of the current token.
    pub(crate) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Emits a token without a literal.
    pub(crate) fn emit(&self, kind: TokenKind) -> Scan {
        Ok(Some(self.make_token(kind, None)))
    }

    /// Builds the current token.
    pub(crate) fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, self.lexeme(), literal, self.cursor.line(), span)
    }

    /// Hands a lexical error to the reporter at the current line.
    fn report_error(&mut self, error: LexError) {
        let line = self.cursor.line();
        trace!(line, offset = self.token_start, %error, "lexical error");

        let end = self.cursor.position();
        // Errors that ran to end of input only know the line they stopped on.
        let span = if error.is_terminal() {
            Span::new(end, end, line, 0)
        } else {
            Span::new(self.token_start, end, line, self.token_start_column)
        };

        let mut builder = DiagnosticBuilder::error(error.to_string()).span(span);
        if let Some(help) = error.help() {
            builder = builder.help(help);
        }

        builder.code(error.code()).emit(&mut *self.reporter);
        self.error_count += 1;
    }
}
