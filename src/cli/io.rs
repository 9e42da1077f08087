//! JSON I/O handling for CLI
//!
//! - Input: JSON objects mapping keys to string arrays, one per stdin line
//! - Output: one JSON object per line on stdout
//! - UTF-8 only

use std::io::{self, BufRead, Write};

use serde_json::Value;

use crate::record::TextRecord;

use super::errors::{CliError, CliResult};

/// Parse one JSON line into a key to values record.
///
/// A bare string value is accepted as a single-element list.
pub fn parse_record(line: &str) -> CliResult<TextRecord> {
    let value: Value = serde_json::from_str(line)?;
    let Value::Object(map) = value else {
        return Err(CliError::invalid_input("Expected a JSON object"));
    };

    let mut record = TextRecord::new();
    for (key, value) in map {
        let values = match value {
            Value::String(s) => vec![s],
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(CliError::invalid_input(format!(
                        "Value of '{}' must be a string, got {}",
                        key, other
                    ))),
                })
                .collect::<CliResult<Vec<_>>>()?,
            other => {
                return Err(CliError::invalid_input(format!(
                    "Field '{}' must be a string or string array, got {}",
                    key, other
                )))
            }
        };
        record.insert(key, values);
    }

    Ok(record)
}

/// Read one record from stdin
pub fn read_request() -> CliResult<TextRecord> {
    let stdin = io::stdin();
    let mut line = String::new();

    stdin.lock().read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    parse_record(&line)
}

/// Read records from stdin until EOF, skipping blank lines
pub fn read_requests() -> impl Iterator<Item = CliResult<TextRecord>> {
    let stdin = io::stdin();
    stdin.lock().lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(parse_record(&line)),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let record = parse_record(r#"{"page.id": ["7"], "title": "Hi"}"#).unwrap();
        assert_eq!(record["page.id"], vec!["7"]);
        assert_eq!(record["title"], vec!["Hi"]);
    }

    #[test]
    fn test_parse_record_rejects_non_object() {
        assert!(parse_record("[1, 2]").is_err());
        assert!(parse_record(r#"{"k": [1]}"#).is_err());
        assert!(parse_record(r#"{"k": 3}"#).is_err());
        assert!(parse_record("not json").is_err());
    }
}
