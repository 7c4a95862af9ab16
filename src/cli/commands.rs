//! CLI command implementations

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::args::{Command, ConfigArgs};
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

/// Load configuration from file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::ConfigLoad(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::ConfigLoad(format!("Invalid config JSON: {}", e)))?;

    Ok(config)
}

/// Resolve the effective configuration: file (or defaults), then flag overrides
pub fn resolve_config(args: &ConfigArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { args } => serve(&args),
        Command::Config { args } => print_config(&args),
    }
}

/// Start the HTTP server on a fresh tokio runtime
pub fn serve(args: &ConfigArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let addr = config.socket_addr()?.to_string();
    let server = HttpServer::with_config(config)?;

    Logger::info("SERVER_STARTING", &[("addr", addr.as_str())]);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration
pub fn print_config(args: &ConfigArgs) -> CliResult<()> {
    let config = resolve_config(args)?;

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &config).map_err(io::Error::from)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
