//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file so it
//! can be used as a starting point for `loxt.toml`.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub save: Option<PathBuf>,
}

/// Run the config command.
pub fn run_config(args: ConfigArgs, config: &Config) -> Result<()> {
    match args.save {
        Some(path) => {
            config.save_to_path(&path)?;
            info!("wrote configuration to {}", path.display());
        },
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(config.to_toml()?.as_bytes())?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_save_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("loxt.toml");

        let mut config = Config::default();
        config.tokenize.format = OutputFormat::Json;
        config.check.max_errors = 3;

        run_config(ConfigArgs { save: Some(path.clone()) }, &config).unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_default_config_toml() {
        let toml = Config::default().to_toml().unwrap();
        assert!(toml.contains("[tokenize]"));
        assert!(toml.contains("format = \"text\""));
        assert!(toml.contains("max_errors = 0"));
    }
}
