//! loxc-lex - Lexical Analyzer for the Lox Programming Language
//!
//! This crate turns Lox source text into a flat, ordered sequence of tokens
//! for the parser. Scanning is a single pass with at most two characters of
//! lookahead; it never stops on bad input. Lexical errors go to a
//! [`Reporter`](loxc_util::Reporter) and scanning carries on with the next
//! character.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{tokenize, TokenKind};
//! use loxc_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = tokenize("var x = 10;\n", &mut handler);
//!
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[3].as_number(), Some(10.0));
//! assert!(tokens.last().map_or(false, |t| t.is_eof()));
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical error taxonomy
//!
//! # Token Categories
//!
//! - **Single character**: `( ) { } , . - + ; / *`
//! - **One or two characters**: `! != = == < <= > >=`
//! - **Literals**: identifiers (`[A-Za-z_][A-Za-z0-9_]*`), strings
//!   (`"..."`, may span lines, no escapes) and numbers (`12`, `3.5`)
//! - **Keywords**: `and class else false for fun if nil or print return
//!   super this true var while`
//! - **End of input**: a single `Eof` token, always last
//!
//! Comments (`// ...` and non-nesting `/* ... */`) and whitespace produce no
//! tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, keywords, Literal, Token, TokenKind};

use loxc_util::Handler;

/// Scans `source` into tokens, collecting errors in `handler`.
pub fn tokenize(source: &str, handler: &mut Handler) -> Vec<Token> {
    Lexer::new(source, handler).scan_tokens()
}

static_assertions::assert_impl_all!(Token: Send, Sync);
static_assertions::assert_impl_all!(TokenKind: Copy, Send, Sync);
