//! Number literal lexing.
//!
//! Lox numbers are digits with an optional fractional part. There is no
//! sign, exponent, or leading or trailing dot.

use super::core::Scan;
use crate::token::{Literal, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal; the first digit is already consumed.
    pub(crate) fn lex_number(&mut self) -> Scan {
        self.consume_digits();

        // A dot is only part of the number when a digit follows it.
        if self.cursor.peek() == '.' && self.cursor.peek_next().is_ascii_digit() {
            self.cursor.advance();
            self.consume_digits();
        }

        // Digits with an optional fraction always parse.
        let value: f64 = self.lexeme().parse().unwrap_or_default();
        Ok(Some(self.make_token(TokenKind::Number, Some(Literal::Number(value)))))
    }

    fn consume_digits(&mut self) {
        while self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
        }
    }
}
