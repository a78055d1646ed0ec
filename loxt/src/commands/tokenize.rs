//! Tokenize command implementation.
//!
//! Scans one source file and prints its tokens, either one per line or as a
//! JSON array. Diagnostics go to stderr.

use std::io::Write;
use std::path::PathBuf;

use loxc_lex::{tokenize, Literal, Token};
use loxc_util::Handler;
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{read_source, render_diagnostic, OutputFormat};
use crate::error::{LoxtError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source file to scan.
    pub file: PathBuf,
    /// Listing format.
    pub format: OutputFormat,
    /// List the trailing end-of-input token as well.
    pub include_eof: bool,
}

/// One token in the JSON listing.
#[derive(Debug, Serialize)]
struct TokenRecord<'t> {
    kind: &'static str,
    lexeme: &'t str,
    literal: serde_json::Value,
    line: u32,
    column: u32,
    start: usize,
    end: usize,
}

impl<'t> From<&'t Token> for TokenRecord<'t> {
    fn from(token: &'t Token) -> Self {
        let literal = match &token.literal {
            // JSON has no infinity; keep the text listing's spelling instead of null
            Some(lit @ Literal::Number(n)) => serde_json::Number::from_f64(*n)
                .map_or_else(|| serde_json::Value::from(lit.to_string()), serde_json::Value::Number),
            Some(Literal::String(s)) => serde_json::Value::from(s.as_str()),
            None => serde_json::Value::Null,
        };
        Self {
            kind: token.kind.name(),
            lexeme: &token.lexeme,
            literal,
            line: token.line,
            column: token.span.column,
            start: token.span.start,
            end: token.span.end,
        }
    }
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let file = read_source(&args.file)?;
    debug!(file = %file.name(), lines = file.line_count(), "scanning");

    let mut handler = Handler::new();
    let tokens = tokenize(file.content(), &mut handler);

    let listing = format_tokens(&tokens, args.format, args.include_eof)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(listing.as_bytes())?;
    stdout.flush()?;

    for diagnostic in handler.diagnostics() {
        eprint!("{}", render_diagnostic(diagnostic, &file));
    }

    if args.verbose {
        info!(
            tokens = tokens.len(),
            errors = handler.error_count(),
            "tokenized {}",
            file.name()
        );
    }

    if handler.has_errors() {
        return Err(LoxtError::Lexical {
            errors: handler.error_count(),
            files: 1,
        });
    }
    Ok(())
}

/// Format a token listing.
///
/// Text lines are `LINE KIND lexeme literal`, with `null` for a missing
/// literal.
pub fn format_tokens(tokens: &[Token], format: OutputFormat, include_eof: bool) -> Result<String> {
    let listed = tokens.iter().filter(|t| include_eof || !t.is_eof());

    match format {
        OutputFormat::Text => Ok(listed
            .map(|token| format!("{:>4} {}\n", token.line, token))
            .collect()),
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = listed.map(TokenRecord::from).collect();
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            Ok(json)
        },
    }
}
