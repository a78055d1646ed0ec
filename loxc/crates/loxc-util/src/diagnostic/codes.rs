//! Stable identifiers for diagnostics.
//!
//! A code is a one-letter prefix followed by a four-digit number, such as
//! `E1001`. Messages may be reworded; codes stay put. The `E1xxx` range
//! belongs to the scanner.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.as_str(), "E1001");
//! assert_eq!((code.prefix(), code.number()), ("E", 1001));
//! ```

use std::fmt;

/// Code attached to a [`Diagnostic`](super::Diagnostic), printed as
/// `{prefix}{number:04}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// `"E"` for errors, `"W"` for warnings
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The printed form, number zero-padded to four digits.
    pub fn as_str(&self) -> String {
        self.to_string()
    }

    // Scanner

    /// A character that starts no token.
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// Input ended inside a string literal.
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// Input ended inside a `/* */` comment.
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1003);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DiagnosticCode").field(&format_args!("{}", self)).finish()
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
