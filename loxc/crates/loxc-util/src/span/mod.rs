//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets into the buffer plus the 1-based line and column where the
//! located fragment starts.
//!
//! # Examples
//!
//! ```
//! use loxc_util::span::Span;
//!
//! // "var" at the start of the first line
//! let span = Span::new(0, 3, 1, 1);
//! assert_eq!(span.len(), 3);
//!
//! // A location with no extent, e.g. for a reported line
//! let point = Span::point(4);
//! assert!(point.is_empty());
//! ```

mod source_map;

pub use source_map::SourceFile;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end), end exclusive
/// - Line and column numbers of the start (for human-readable output)
///
/// A column of `0` means the column is unknown; this is the case for
/// diagnostics that were reported with a line number only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, 0 if unknown)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 1,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// let span = Span::new(4, 5, 1, 5);
    /// assert_eq!(span.start, 4);
    /// assert_eq!(span.column, 5);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span that only knows its line
    #[inline]
    pub const fn point(line: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column: 0,
        }
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a column is known for this span
    #[inline]
    pub const fn has_column(&self) -> bool {
        self.column > 0
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_column() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}", self.line)
        }
    }
}
