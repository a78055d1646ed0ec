//! Check command implementation.
//!
//! Scans any number of files in parallel and reports their lexical errors
//! in the order the files were given.

use std::io::Write;
use std::path::PathBuf;

use loxc_lex::tokenize;
use loxc_util::{Diagnostic, Handler, SourceFile};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::commands::common::{read_source, render_diagnostic};
use crate::error::{LoxtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Maximum number of diagnostics to print; 0 prints all of them.
    pub max_errors: usize,
}

/// Outcome of scanning a single file.
#[derive(Debug)]
pub struct FileReport {
    /// The scanned file.
    pub file: SourceFile,
    /// Number of tokens produced, including the end-of-input token.
    pub token_count: usize,
    /// Everything the lexer reported.
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Whether this file had lexical errors.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    if args.files.is_empty() {
        return Err(LoxtError::Validation("No input files specified".to_string()));
    }

    let reports = check_files(&args.files)?;

    let mut printed = 0;
    for diagnostic_text in reports.iter().flat_map(|report| {
        report
            .diagnostics
            .iter()
            .map(move |diagnostic| render_diagnostic(diagnostic, &report.file))
    }) {
        if args.max_errors != 0 && printed == args.max_errors {
            break;
        }
        eprint!("{}", diagnostic_text);
        printed += 1;
    }

    let errors: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    let failed = reports.iter().filter(|r| r.has_errors()).count();

    if args.verbose {
        for report in &reports {
            info!(
                tokens = report.token_count,
                errors = report.diagnostics.len(),
                "checked {}",
                report.file.name()
            );
        }
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", summary(reports.len(), errors, failed))?;

    if errors > 0 {
        return Err(LoxtError::Lexical {
            errors,
            files: failed,
        });
    }
    Ok(())
}

/// Scan every file on the rayon pool, keeping input order.
pub fn check_files(paths: &[PathBuf]) -> Result<Vec<FileReport>> {
    paths
        .par_iter()
        .map(|path| -> Result<FileReport> {
            let file = read_source(path)?;
            let mut handler = Handler::new();
            let token_count = tokenize(file.content(), &mut handler).len();
            debug!(file = %file.name(), token_count, "scanned");
            Ok(FileReport {
                file,
                token_count,
                diagnostics: handler.take_diagnostics(),
            })
        })
        .collect()
}

/// One-line summary printed after checking.
pub fn summary(files: usize, errors: usize, failed: usize) -> String {
    if errors == 0 {
        format!("checked {} file(s): no lexical errors", files)
    } else {
        format!(
            "checked {} file(s): {} lexical error(s) in {} file(s)",
            files, errors, failed
        )
    }
}
