//! JSON output for one-shot commands
//!
//! One JSON object per invocation on stdout, UTF-8.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{json, Value};

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_json(&json!({
        "status": "ok",
        "data": data
    }))
}

/// Write any serializable value as a single JSON line to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
