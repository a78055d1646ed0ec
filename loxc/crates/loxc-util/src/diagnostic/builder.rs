//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line under a rendered diagnostic.

use super::{Diagnostic, DiagnosticCode, Level, Reporter, Span};
use crate::error::DiagnosticResult;
use crate::span::SourceFile;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("var @ = 1;", 1, 5, 6, Some("here"));
/// assert_eq!(
///     snippet.format(),
///     "  |\n1 | var @ = 1;\n  |     ^ here\n"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based, 0 if unknown)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet without highlighting
    pub fn line_only(line: impl Into<String>, line_number: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: 0,
            end_column: 0,
            label: None,
        }
    }

    /// Format the snippet for display
    ///
    /// Returns the source line with a gutter, and a caret (^) line under
    /// the relevant range when the column is known.
    pub fn format(&self) -> String {
        let number = self.line_number.to_string();
        let gutter = " ".repeat(number.len());
        let mut out = format!("{gutter} |\n{number} | {}\n", self.line);

        if self.start_column > 0 {
            let width = self.end_column.saturating_sub(self.start_column).max(1);
            let padding = " ".repeat(self.start_column - 1);
            out.push_str(&format!("{gutter} | {padding}{}", "^".repeat(width)));
            if let Some(label) = &self.label {
                out.push(' ');
                out.push_str(label);
            }
            out.push('\n');
        }

        out
    }
}

/// Fluent builder for [`Diagnostic`]
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use loxc_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unterminated string literal")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::point(2))
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.span.line, 2);
/// ```
#[derive(Clone, Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start building an error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start building a warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Start building a diagnostic of any level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, Span::DUMMY),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish building and hand the diagnostic to a reporter
    pub fn emit(self, reporter: &mut dyn Reporter) {
        reporter.report_diagnostic(self.diagnostic);
    }
}

impl Diagnostic {
    /// Render the diagnostic with the source line it points at
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use loxc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.lox", "var @ = 1;");
    /// let diag = Diagnostic::error("unexpected character '@'", Span::new(4, 5, 1, 5))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    ///
    /// let rendered = diag.render(&file).unwrap();
    /// assert!(rendered.starts_with("main.lox:1:5: [line 1] error[E1001]"));
    /// assert!(rendered.contains("    ^"));
    /// ```
    pub fn render(&self, file: &SourceFile) -> DiagnosticResult<String> {
        let line_number = self.span.line as usize;
        let line = file.line_text(line_number)?;

        let snippet = if self.span.has_column() {
            let start_column = self.span.column as usize;
            let width = file
                .span_text(self.span)
                .map(|text| text.split('\n').next().unwrap_or("").chars().count())
                .unwrap_or(1);
            SourceSnippet::new(line, line_number, start_column, start_column + width, None::<String>)
        } else {
            SourceSnippet::line_only(line, line_number)
        };

        let mut out = format!("{}:{}: {}\n", file.name(), self.span, self);
        out.push_str(&snippet.format());
        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        Ok(out)
    }
}
