//! Failures surfaced by `loxt` commands.
//!
//! `main` prints any of these as `error: ...` and exits with status 1.

use std::path::PathBuf;

use thiserror::Error;

/// Everything a `loxt` command can fail with.
#[derive(Error, Debug)]
pub enum LoxtError {
    /// Missing, unreadable or malformed `loxt.toml`.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read {}: {source}", path.display())]
    ReadSource { path: PathBuf, source: std::io::Error },

    /// Arguments that parse but make no sense together.
    #[error("Invalid arguments: {0}")]
    Validation(String),

    /// The scanned sources contained lexical errors.
    ///
    /// The diagnostics themselves have already been printed.
    #[error("{errors} lexical error(s) in {files} file(s)")]
    Lexical {
        errors: usize,
        /// Files with at least one error
        files: usize,
    },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoxtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LoxtError::Config("bad key `fmt`".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad key `fmt`");
    }

    #[test]
    fn test_read_source_display() {
        let err = LoxtError::ReadSource {
            path: PathBuf::from("main.lox"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "Cannot read main.lox: file not found");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LoxtError::Validation("no input files".to_string());
        assert_eq!(err.to_string(), "Invalid arguments: no input files");
    }

    #[test]
    fn test_lexical_error_display() {
        let err = LoxtError::Lexical { errors: 3, files: 2 };
        assert_eq!(err.to_string(), "3 lexical error(s) in 2 file(s)");
    }

    #[test]
    fn test_conversions_with_question_mark() {
        fn write_denied() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))?
        }
        fn bad_json() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{")?)
        }

        assert!(matches!(write_denied(), Err(LoxtError::Io(_))));
        assert!(matches!(bad_json(), Err(LoxtError::Json(_))));
    }
}
