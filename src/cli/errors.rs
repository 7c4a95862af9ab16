//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use std::io;

use thiserror::Error;

use crate::http_server::ConfigError;

/// CLI error, displayed with a stable code prefix
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file missing, unreadable or not JSON
    #[error("BOOKSHELF_CLI_CONFIG_LOAD: {0}")]
    ConfigLoad(String),

    /// Config values rejected by validation
    #[error("BOOKSHELF_CLI_INVALID_CONFIG: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Writing to stdout failed
    #[error("BOOKSHELF_CLI_OUTPUT: {0}")]
    Output(#[from] io::Error),

    /// Runtime could not start or the server stopped with an error
    #[error("BOOKSHELF_CLI_BOOT_FAILED: {0}")]
    Boot(String),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
