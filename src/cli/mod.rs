//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - serve: run the HTTP server
//! - config: print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{load_config, print_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
