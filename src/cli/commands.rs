//! CLI command implementations
//!
//! Responses go to stdout one JSON object per line, so provider log events
//! are switched off for CLI runs.

use std::path::Path;

use serde_json::json;

use crate::coercion;
use crate::warehouse::{FilesystemProvider, WarehouseConfig, WarehouseProvider};

use super::args::Command;
use super::errors::CliResult;
use super::io::{read_request, read_requests, write_error, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Store { config } => store(&config),
        Command::Dig { config } => dig(&config),
        Command::Normalize { config } => normalize(&config),
        Command::Coerce { token } => coerce(&token),
    }
}

fn open_provider(config_path: &Path) -> CliResult<FilesystemProvider> {
    let config = WarehouseConfig::load(config_path)?.quiet();
    Ok(FilesystemProvider::new(config)?)
}

/// Store every record read from stdin.
///
/// A bad line or a rejected record produces an error response for that
/// line; processing continues with the next one.
pub fn store(config_path: &Path) -> CliResult<()> {
    let provider = open_provider(config_path)?;

    for request in read_requests() {
        let record = match request {
            Ok(record) => record,
            Err(e) => {
                write_error(e.code_str(), e.message())?;
                continue;
            }
        };

        match provider.store_information(&record) {
            Ok(outcome) => write_response(serde_json::to_value(outcome)?)?,
            Err(e) => write_error(e.code(), &e.to_string())?,
        }
    }

    Ok(())
}

/// Run one query read from stdin
pub fn dig(config_path: &Path) -> CliResult<()> {
    let provider = open_provider(config_path)?;
    let query = read_request()?;

    match provider.dig_information(&query) {
        Ok(records) => write_response(json!(records)),
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}

/// Print normalized records and identities without storing them
pub fn normalize(config_path: &Path) -> CliResult<()> {
    let provider = open_provider(config_path)?;

    for request in read_requests() {
        let record = match request {
            Ok(record) => record,
            Err(e) => {
                write_error(e.code_str(), e.message())?;
                continue;
            }
        };

        let (normalized, identity) = provider.prepare(&record);
        write_response(json!({
            "identity": identity,
            "record": normalized,
        }))?;
    }

    Ok(())
}

/// Print the typed value inferred for a token
pub fn coerce(token: &str) -> CliResult<()> {
    let value = coercion::coerce(token);
    write_response(json!({
        "input": token,
        "rendered": value.render(),
        "value": value,
    }))
}
