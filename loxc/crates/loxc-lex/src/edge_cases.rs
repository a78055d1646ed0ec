//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token, TokenKind};
    use loxc_util::{Diagnostic, Handler};

    fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut handler = Handler::new();
        let tokens = tokenize(source, &mut handler);
        (tokens, handler.take_diagnostics())
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).0.iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (tokens, _) = lex(&format!("var {} = 1;", name));
        assert_eq!(tokens[1].lexeme, name);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(400);
        let (tokens, errors) = lex(&digits);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].as_number(), Some(f64::INFINITY));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_no_whitespace() {
        assert_eq!(
            kinds("if(x>=1){print\"y\";}"),
            vec![
                TokenKind::If,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::GreaterEqual,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::Print,
                TokenKind::String,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let (tokens, errors) = lex("a\r\nb\r\n");
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 3);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_only_comments() {
        let (tokens, errors) = lex("// one\n/* two */\n// three");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line, 3);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_nul_character_is_unexpected() {
        let (tokens, errors) = lex("a\0b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "unexpected character '\0'");
    }

    #[test]
    fn test_edge_nul_inside_string() {
        let (tokens, errors) = lex("\"a\0b\"");
        assert_eq!(tokens[0].as_str(), Some("a\0b"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_unterminated_string_after_tokens() {
        let (tokens, errors) = lex("var s = \"abc");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Eof,
            ]
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_edge_errors_then_unterminated_comment() {
        let (tokens, errors) = lex("@\n/* open");
        assert_eq!(tokens.len(), 1);
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["unexpected character '@'", "unterminated multiline comment"]
        );
        assert_eq!(errors[1].line(), 2);
    }

    #[test]
    fn test_edge_slash_star_inside_string() {
        let (tokens, errors) = lex("\"/*\" 1");
        assert_eq!(tokens.len(), 3);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_comment_right_after_token() {
        assert_eq!(
            kinds("a//b\nc"),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_division_vs_comment() {
        assert_eq!(
            kinds("a / b /* c */ / d"),
            vec![
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_spans_do_not_overlap() {
        let (tokens, _) = lex("var x=\"a\nb\"+1.5;// c\nprint x;");
        for pair in tokens.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn test_edge_every_unexpected_ascii_punctuation() {
        for c in ['@', '#', '$', '%', '^', '&', '|', '~', '`', '?', ':', '[', ']', '\\', '\''] {
            let (tokens, errors) = lex(&c.to_string());
            assert_eq!(tokens.len(), 1, "{:?}", c);
            assert_eq!(errors.len(), 1, "{:?}", c);
            assert_eq!(errors[0].message, format!("unexpected character '{}'", c));
        }
    }
}
