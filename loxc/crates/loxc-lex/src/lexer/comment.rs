//! Comment lexing.
//!
//! This module handles skipping line and block comments. Both are entered
//! after their opening two characters have been consumed.

use super::core::Scan;
use crate::error::LexError;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a line comment up to, but not including, the newline.
    pub(crate) fn skip_line_comment(&mut self) -> Scan {
        while self.cursor.peek() != '\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
        Ok(None)
    }

    /// Skips a block comment through its closing `*/`.
    ///
    /// Block comments do not nest: the first `*/` closes the comment.
    pub(crate) fn skip_block_comment(&mut self) -> Scan {
        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedComment);
            }

            if self.cursor.peek() == '*' && self.cursor.peek_next() == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(None);
            }

            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::tokenize;
    use loxc_util::{Diagnostic, Handler};

    fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut handler = Handler::new();
        let tokens = tokenize(source, &mut handler);
        (tokens, handler.take_diagnostics())
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        let (tokens, errors) = lex("// hi\n42");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].as_number(), Some(42.0));
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].line, 2);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        let (tokens, errors) = lex("1 // trailing");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_eof());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_line_comment_swallows_odd_characters() {
        let (tokens, errors) = lex("// @#$ \"open /*");
        assert_eq!(tokens.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_block_comment_is_skipped() {
        let (tokens, errors) = lex("a /* comment */ b");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["a", "b", ""]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_block_comment_with_isolated_star_and_slash() {
        let (tokens, errors) = lex("/* a * b / c */ x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "x");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_block_comment_counts_newlines() {
        let (tokens, _) = lex("/* one\ntwo\nthree */ x");
        assert_eq!(tokens[0].line, 3);
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        let (tokens, _) = lex("/* outer /* inner */ */");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Star, TokenKind::Slash, TokenKind::Eof]);
    }

    #[test]
    fn test_star_slash_sequence_only() {
        let (tokens, errors) = lex("/***/1");
        assert_eq!(tokens[0].as_number(), Some(1.0));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unterminated_block_comment() {
        let (tokens, errors) = lex("1\n/* never\nclosed *");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_eof());
        assert_eq!(tokens[1].line, 3);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "unterminated multiline comment");
        assert_eq!(errors[0].line(), 3);
    }

    #[test]
    fn test_slash_star_at_end_of_input() {
        let (tokens, errors) = lex("/*");
        assert_eq!(tokens.len(), 1);
        assert_eq!(errors[0].message, "unterminated multiline comment");
    }
}
