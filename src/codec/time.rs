//! Timestamp and display window parsing
//!
//! Catalog dates are written as `YYYYMMDD:HH:MM:SS` wall-clock time in a named
//! IANA zone and stored as seconds since the Unix epoch. The same instant
//! written in two different zones maps to the same epoch second.

use chrono::{Duration, LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::errors::{CodecError, CodecResult};

/// Wall-clock format used by the catalog and by query parameters
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d:%H:%M:%S";

/// An inclusive `[start_time, end_time]` interval in epoch seconds.
///
/// `end_time >= start_time` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayWindow {
    pub start_time: i64,
    pub end_time: i64,
}

impl DisplayWindow {
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self { start_time, end_time }
    }

    /// Returns whether `t` falls inside the window, both ends inclusive
    pub fn contains(&self, t: i64) -> bool {
        self.start_time <= t && t <= self.end_time
    }
}

/// Resolves an IANA zone name.
pub fn parse_time_zone(zone: &str) -> CodecResult<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| CodecError::UnknownTimeZone(zone.to_string()))
}

/// Parses `text` as local time in `zone` and returns seconds since the epoch.
///
/// An ambiguous local time (clocks turned back) resolves to the later instant,
/// i.e. the standard-time reading. A local time skipped by a forward
/// transition is read with the offset in effect before the transition, so
/// 02:30 on a New York spring-forward day is 07:30 UTC.
pub fn parse_timestamp(text: &str, zone: &str) -> CodecResult<i64> {
    let tz = parse_time_zone(zone)?;
    let naive = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|e| {
        CodecError::InvalidTimestamp {
            text: text.to_string(),
            reason: e.to_string(),
        }
    })?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.timestamp()),
        LocalResult::Ambiguous(earliest, latest) => {
            debug!(%text, %zone, earliest = %earliest, latest = %latest, "ambiguous local time");
            Ok(latest.timestamp())
        }
        LocalResult::None => {
            let ts = skipped_local_timestamp(&tz, &naive).ok_or_else(|| CodecError::InvalidTimestamp {
                text: text.to_string(),
                reason: "out of range".to_string(),
            })?;
            debug!(%text, %zone, ts, "local time skipped by transition, using prior offset");
            Ok(ts)
        }
    }
}

/// Reads a gap time with the offset in effect a day earlier.
fn skipped_local_timestamp(tz: &Tz, naive: &NaiveDateTime) -> Option<i64> {
    let before = naive.checked_sub_signed(Duration::days(1))?;
    let offset = tz.offset_from_utc_datetime(&before).fix().local_minus_utc();
    Some(naive.and_utc().timestamp() - i64::from(offset))
}

/// Parses a `{start, end, time_zone}` object into a display window.
pub fn parse_display_window(value: &Value) -> CodecResult<DisplayWindow> {
    let obj = value.as_object().ok_or(CodecError::NotAnObject)?;

    let start = string_field(obj, "start")?;
    let end = string_field(obj, "end")?;
    let time_zone = string_field(obj, "time_zone")?;

    // An unknown zone takes precedence over malformed dates.
    parse_time_zone(time_zone)?;

    let start_time = parse_timestamp(start, time_zone)?;
    let end_time = parse_timestamp(end, time_zone)?;

    Ok(DisplayWindow { start_time, end_time })
}

fn string_field<'a>(obj: &'a Map<String, Value>, name: &'static str) -> CodecResult<&'a str> {
    obj.get(name)
        .ok_or(CodecError::MissingField(name))?
        .as_str()
        .ok_or(CodecError::NotAString(name))
}
