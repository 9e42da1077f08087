//! CLI module for crawlstore
//!
//! Thin JSON-over-stdio surface around the library:
//! - store: persist records read from stdin, one JSON object per line
//! - dig: run one query read from stdin
//! - normalize: show the normalized form and identity of records
//! - coerce: show the typed value inferred for a token

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{coerce, dig, normalize, run, run_command, store};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_record, read_request, read_requests, write_error, write_response};
