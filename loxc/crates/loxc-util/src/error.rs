//! Errors raised while mapping spans back onto a source file.

use thiserror::Error;

/// A span or line that does not fit the [`SourceFile`](crate::SourceFile)
/// it was looked up in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    #[error("span ends before it starts: {start}..{end}")]
    ReversedSpan { start: usize, end: usize },

    #[error("span {start}..{end} runs past the end of a {len}-byte file")]
    SpanPastEnd { len: usize, start: usize, end: usize },

    /// Lines are 1-based, so line 0 is always missing.
    #[error("no line {line} in a file of {line_count} line(s)")]
    NoSuchLine { line: usize, line_count: usize },
}

/// Why a [`Diagnostic`](crate::diagnostic::Diagnostic) could not be rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    #[error("cannot render diagnostic: {0}")]
    RenderFailed(#[from] SourceMapError),
}

pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_line_message() {
        let err = SourceMapError::NoSuchLine { line: 7, line_count: 3 };
        assert_eq!(err.to_string(), "no line 7 in a file of 3 line(s)");
    }

    #[test]
    fn test_render_failed_wraps_source_map_error() {
        let err: DiagnosticError = SourceMapError::ReversedSpan { start: 4, end: 2 }.into();
        assert_eq!(
            err.to_string(),
            "cannot render diagnostic: span ends before it starts: 4..2"
        );
    }
}
