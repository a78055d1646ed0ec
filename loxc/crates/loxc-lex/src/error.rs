//! Lexical error taxonomy.

use loxc_util::DiagnosticCode;
use thiserror::Error;

/// Something in the source that starts no valid token or never ends.
///
/// These are never returned to the lexer's caller; they travel through the
/// lexer's sub-scanners as values and are handed to the reporter.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that begins no token, e.g. `@`, `#` or `$`.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// An opening `"` with no closing `"` before end of input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// An opening `/*` with no closing `*/` before end of input.
    #[error("unterminated multiline comment")]
    UnterminatedComment,
}

impl LexError {
    /// The diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        }
    }

    /// Whether the error consumed the rest of the input.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LexError::UnexpectedCharacter(_))
    }

    /// A fix suggestion shown under the diagnostic, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnexpectedCharacter(_) => None,
            LexError::UnterminatedString => Some("add a closing `\"` to end the string"),
            LexError::UnterminatedComment => Some("close the comment with `*/`"),
        }
    }
}
