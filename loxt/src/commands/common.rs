//! Common types and utilities for loxt commands.

use std::path::Path;

use clap::ValueEnum;
use loxc_util::{Diagnostic, SourceFile};
use serde::{Deserialize, Serialize};

use crate::error::{LoxtError, Result};

/// How `tokenize` prints its token listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

/// Read a source file into a [`SourceFile`] named after its path.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let content = std::fs::read_to_string(path).map_err(|source| LoxtError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Render a diagnostic against its file.
///
/// Falls back to the one-line form when the diagnostic's line is not in the
/// file.
pub fn render_diagnostic(diagnostic: &Diagnostic, file: &SourceFile) -> String {
    diagnostic
        .render(file)
        .unwrap_or_else(|_| format!("{}: {}\n", file.name(), diagnostic))
}
