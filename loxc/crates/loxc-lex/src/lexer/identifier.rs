//! Identifier and keyword lexing.
//!
//! Identifiers are ASCII only: a letter or `_`, then letters, digits
//! and `_`.

use super::core::Scan;
use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

/// Checks if a character can start an identifier.
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword; the first character is already
    /// consumed.
    pub(crate) fn lex_identifier(&mut self) -> Scan {
        while is_ident_continue(self.cursor.peek()) {
            self.cursor.advance();
        }

        let kind = keyword_from_ident(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.emit(kind)
    }
}
