//! Source files and their line tables.
//!
//! A [`SourceFile`] owns a script's text together with the byte offset of
//! every line start, so diagnostics that only carry a line number can still
//! show the offending source line.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use loxc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.lox", "print 1;\nprint 2;");
/// assert_eq!(file.name(), "main.lox");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_text(2).unwrap(), "print 2;");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A file always has at least one (possibly empty) line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// Column is measured in characters from the start of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.lox", "var a;\nvar b;");
    /// assert_eq!(file.offset_to_line_col(11), (2, 5));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line + 1, column + 1)
    }

    /// Get the text of a 1-based line, without its line terminator
    pub fn line_text(&self, line: usize) -> SourceMapResult<&str> {
        let index = line
            .checked_sub(1)
            .filter(|&i| i < self.line_count())
            .ok_or(SourceMapError::NoSuchLine {
                line,
                line_count: self.line_count(),
            })?;

        let start = self.line_starts[index];
        let end = self
            .line_start(index + 1)
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Ok(text.trim_end_matches('\n').trim_end_matches('\r'))
    }

    /// Get the source text covered by a span
    pub fn span_text(&self, span: Span) -> SourceMapResult<&str> {
        if span.start > span.end {
            return Err(SourceMapError::ReversedSpan {
                start: span.start,
                end: span.end,
            });
        }
        self.content
            .get(span.start..span.end)
            .ok_or(SourceMapError::SpanPastEnd {
                len: self.content.len(),
                start: span.start,
                end: span.end,
            })
    }
}
