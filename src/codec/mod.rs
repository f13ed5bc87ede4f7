//! Field codecs for catalog and configuration documents
//!
//! Domain-specific parsers plugged into the schema validator as transformer
//! nodes:
//!
//! - `display_window`: `{start, end, time_zone}` → `{start_time, end_time}`
//! - `ipv4`: dotted-quad literal, passed through unchanged

mod errors;
mod net;
mod time;

use serde_json::{json, Value};

pub use errors::{CodecError, CodecResult};
pub use net::parse_ipv4_literal;
pub use time::{parse_display_window, parse_time_zone, parse_timestamp, DisplayWindow, TIMESTAMP_FORMAT};

/// Transformer: parses a display period object into epoch-second bounds.
pub fn display_window_transformer(value: &Value) -> Result<Value, String> {
    let window = parse_display_window(value).map_err(|e| e.to_string())?;
    Ok(json!({
        "start_time": window.start_time,
        "end_time": window.end_time,
    }))
}

/// Transformer: checks an IPv4 literal and passes it through.
pub fn ipv4_transformer(value: &Value) -> Result<Value, String> {
    let text = value
        .as_str()
        .ok_or_else(|| "expected an IPv4 string".to_string())?;
    parse_ipv4_literal(text).map_err(|e| e.to_string())?;
    Ok(value.clone())
}
