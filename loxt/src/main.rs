//! Loxt CLI - command-line front end for the Lox lexer.
//!
//! This is the main entry point for the loxt CLI application.
//! It uses clap for argument parsing and dispatches to the matching
//! command handler.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat, run_check, run_config, run_tokenize, CheckArgs, ConfigArgs,
    TokenizeArgs,
};
use config::Config;
use error::{LoxtError, Result};

/// Loxt - scan Lox source files
///
/// Loxt prints the tokens of a Lox script and checks scripts for lexical
/// errors.
#[derive(Parser, Debug)]
#[command(name = "loxt")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the loxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Diagnostics are written to stderr; the exit status is non-zero when
    /// the file has lexical errors.
    Tokenize(TokenizeCommand),

    /// Check source files for lexical errors
    ///
    /// Files are scanned in parallel and reported in the order given.
    Check(CheckCommand),

    /// Print or save the effective configuration
    Config(ConfigCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source file to scan
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also list the end-of-input token
    #[arg(long)]
    include_eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Maximum number of diagnostics to print, 0 for all (default: from config)
    #[arg(short, long)]
    max_errors: Option<usize>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file instead of printing it
    #[arg(long)]
    save: Option<PathBuf>,
}

/// Main entry point for the loxt CLI.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Load configuration, initialize logging and run the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token listings on stdout.
/// `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LoxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, verbose, &config),
        Commands::Check(args) => execute_check(args, verbose, &config),
        Commands::Config(args) => run_config(ConfigArgs { save: args.save }, &config),
    }
}

/// Execute the tokenize command; flags override the `[tokenize]` table.
fn execute_tokenize(args: TokenizeCommand, verbose: bool, config: &Config) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        verbose,
        file: args.file,
        format: args.format.unwrap_or(config.tokenize.format),
        include_eof: args.include_eof || config.tokenize.include_eof,
    };
    run_tokenize(tokenize_args)
}

/// Execute the check command; flags override the `[check]` table.
fn execute_check(args: CheckCommand, verbose: bool, config: &Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        files: args.files,
        max_errors: args.max_errors.unwrap_or(config.check.max_errors),
    };
    run_check(check_args)
}
