//! Operator lexing.
//!
//! Handles the one-or-two character operators and the slash, which may also
//! open a comment.

use super::core::Scan;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `!`, `=`, `<` or `>`, each optionally followed by `=`.
    pub(crate) fn lex_comparison(&mut self, first: char) -> Scan {
        let with_equal = self.cursor.match_char('=');
        let kind = match (first, with_equal) {
            ('!', true) => TokenKind::BangEqual,
            ('!', false) => TokenKind::Bang,
            ('=', true) => TokenKind::EqualEqual,
            ('=', false) => TokenKind::Equal,
            ('<', true) => TokenKind::LessEqual,
            ('<', false) => TokenKind::Less,
            ('>', true) => TokenKind::GreaterEqual,
            _ => TokenKind::Greater,
        };
        self.emit(kind)
    }

    /// Lexes `/`: a line comment, a block comment, or the division operator.
    pub(crate) fn lex_slash(&mut self) -> Scan {
        if self.cursor.match_char('/') {
            self.skip_line_comment()
        } else if self.cursor.match_char('*') {
            self.skip_block_comment()
        } else {
            self.emit(TokenKind::Slash)
        }
    }
}
