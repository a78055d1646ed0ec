//! String literal lexing.

use super::core::Scan;
use crate::error::LexError;
use crate::token::{Literal, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal; the opening quote is already consumed.
    ///
    /// Strings may span lines and have no escape sequences. The literal is
    /// the text strictly between the quotes.
    pub(crate) fn lex_string(&mut self) -> Scan {
        while self.cursor.peek() != '"' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            return Err(LexError::UnterminatedString);
        }

        // closing quote
        self.cursor.advance();

        let lexeme = self.lexeme();
        let contents = &lexeme[1..lexeme.len() - 1];
        let literal = Literal::String(contents.to_owned());
        Ok(Some(self.make_token(TokenKind::String, Some(literal))))
    }
}
