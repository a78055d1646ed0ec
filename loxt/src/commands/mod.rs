//! Command modules for the loxt CLI.
//!
//! Each subcommand lives in its own file with an `Args` struct and a
//! `run_*` entry point.

pub mod common;

pub mod check;
pub mod config;
pub mod tokenize;

pub use check::{run_check, CheckArgs};
pub use config::{run_config, ConfigArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};
