//! Problems found in a Lox script, and the sinks that collect them.
//!
//! Phases never print or abort on a problem in the user's script. They hand
//! a [`Diagnostic`] to a [`Reporter`] and keep going; the caller decides
//! afterwards, usually by asking a [`Handler`] whether errors were seen.
//!
//! # Examples
//!
//! ## Line-only reporting
//!
//! ```
//! use loxc_util::diagnostic::{Handler, Reporter};
//!
//! let mut handler = Handler::new();
//! handler.report(1, "unterminated string literal");
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].line(), 1);
//! ```
//!
//! ## Using the fluent builder API
//!
//! ```
//! use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use loxc_util::span::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .help("remove this character")
//!     .emit(&mut handler);
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use std::fmt;

use crate::Span;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error; the phase's output should not be trusted
    Error,
    /// A warning that doesn't invalidate the output
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        };
        f.write_str(name)
    }
}

/// One reported problem: what went wrong and where.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub level: Level,
    /// Text shown after the `error:` prefix
    pub message: String,
    /// Where the problem is; a zero column means only the line is known
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    /// Extra context, rendered as `note:` lines
    pub notes: Vec<String>,
    /// Fix suggestions, rendered as `help:` lines
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with no code, notes or help.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Shorthand for [`Level::Error`].
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Shorthand for [`Level::Warning`].
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Line the diagnostic was reported on (1-based)
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }
}

impl fmt::Display for Diagnostic {
    /// Formats as `[line N] error[E1001]: message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.span.line, self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// An error sink.
///
/// Anything that can record diagnostics. Reporting never alters the
/// control flow of the phase doing the reporting.
pub trait Reporter {
    /// Record a fully built diagnostic
    fn report_diagnostic(&mut self, diagnostic: Diagnostic);

    /// Record an error known only by its line and message
    fn report(&mut self, line: u32, message: &str) {
        self.report_diagnostic(Diagnostic::error(message, Span::point(line)));
    }
}

impl Reporter for Vec<Diagnostic> {
    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// The default [`Reporter`]: keeps every diagnostic, in arrival order.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// An empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Everything reported so far, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Moves the diagnostics out, leaving the handler empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl Reporter for Handler {
    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        let names: Vec<String> = [Level::Error, Level::Warning, Level::Note]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, ["error", "warning", "note"]);
    }

    #[test]
    fn test_diagnostic_builders() {
        let diag = Diagnostic::error("unexpected character '~'", Span::new(4, 5, 1, 5))
            .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .with_note("Lox has no `~` operator")
            .with_help("use `!` for negation");
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diag.notes, ["Lox has no `~` operator"]);
        assert_eq!(diag.helps, ["use `!` for negation"]);
        assert_eq!(diag.line(), 1);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("unterminated string literal", Span::point(3))
            .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING);
        assert_eq!(
            diag.to_string(),
            "[line 3] error[E1002]: unterminated string literal"
        );

        let plain = Diagnostic::warning("odd", Span::point(1));
        assert_eq!(plain.to_string(), "[line 1] warning: odd");
    }

    #[test]
    fn test_empty_handler_has_no_errors() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_report_line_and_message() {
        let mut handler = Handler::new();
        handler.report(4, "unexpected character '#'");

        assert!(handler.has_errors());
        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.line(), 4);
        assert_eq!(diag.message, "unexpected character '#'");
        assert_eq!(diag.code, None);
    }

    #[test]
    fn test_handler_keeps_order() {
        let mut handler = Handler::new();
        handler.report(1, "first");
        handler.report_diagnostic(Diagnostic::warning("second", Span::point(2)));
        handler.report(3, "third");

        let messages: Vec<_> = handler
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_take_and_clear() {
        let mut handler = Handler::new();
        handler.report(1, "first");
        assert_eq!(handler.take_diagnostics().len(), 1);
        assert!(handler.diagnostics().is_empty());

        handler.report(2, "second");
        handler.clear();
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_vec_reporter() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(2, "oops");
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].span, Span::point(2));
    }
}
