//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Lexer struct, scan loop and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `operator` - One or two character operators and `/`
//! - `comment` - Comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
