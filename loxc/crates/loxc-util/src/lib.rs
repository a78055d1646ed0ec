//! loxc-util - Shared Foundation Types for the Lox Front End
//!
//! This crate holds the pieces every phase of the Lox toolchain needs but
//! none of them owns:
//!
//! - [`span`] - Source locations and the line table of a source file
//! - [`diagnostic`] - Diagnostics, diagnostic codes and the [`Reporter`]
//!   error sink with its collecting implementation [`Handler`]
//! - [`error`] - Error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use loxc_util::{Handler, Reporter};
//!
//! let mut handler = Handler::new();
//! handler.report(3, "unexpected character '@'");
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].span.line, 3);
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, Reporter};
pub use span::{SourceFile, Span};

static_assertions::assert_impl_all!(Handler: Send, Sync);
static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
