//! `loxt.toml`: defaults for the command-line flags.
//!
//! Flags given on the command line always win over values read here.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::commands::common::OutputFormat;
use crate::error::{LoxtError, Result};

/// File name looked up in each search directory.
pub const CONFIG_FILE_NAME: &str = "loxt.toml";

/// Contents of a `loxt.toml`.
///
/// Top-level keys are global; `[tokenize]` and `[check]` hold per-command
/// defaults. Missing keys fall back to their defaults, so an empty file is
/// accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Same as passing `--verbose`.
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub tokenize: TokenizeConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

/// The `[tokenize]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenizeConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// List the trailing `EOF` token too.
    #[serde(default)]
    pub include_eof: bool,
}

/// The `[check]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Maximum number of diagnostics to print; 0 prints all of them.
    #[serde(default)]
    pub max_errors: usize,
}

impl Config {
    /// Reads the first `loxt.toml` found in the working directory,
    /// `~/.config/loxt/` or the platform config directory, in that order.
    /// With none of them present the defaults apply.
    pub fn load() -> Result<Self> {
        Self::search_paths()
            .into_iter()
            .find(|path| path.is_file())
            .map_or_else(|| Ok(Self::default()), |path| Self::load_from_path(&path))
    }

    /// Reads an explicitly named file, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LoxtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| LoxtError::Config(format!("Failed to parse configuration: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| LoxtError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Writes the TOML form, creating missing parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        paths.extend(home_dir().map(|home| home.join(".config").join("loxt")));
        paths.extend(config_dir().map(|dir| dir.join("loxt")));
        for dir in paths.iter_mut().skip(1) {
            dir.push(CONFIG_FILE_NAME);
        }
        paths
    }
}
