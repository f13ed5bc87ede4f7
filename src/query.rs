//! Search request resolution
//!
//! Turns raw request parameters into a concrete search. Only privileged
//! clients may pin the query time (`dt` + `tz`) or ask for every unexpired ad
//! (`all=1`). Everything else falls back to the current time and the regular
//! active-window search; the fallback branch taken is reported in
//! `TimeSource`.

use std::collections::HashMap;

use tracing::debug;

use crate::codec::parse_timestamp;

/// Raw query-string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Wall-clock time, `YYYYMMDD:HH:MM:SS`
    pub dt: Option<String>,
    /// IANA zone name for `dt`
    pub tz: Option<String>,
    /// `1` to request all unexpired ads
    pub all: Option<String>,
}

impl QueryParams {
    /// Picks `dt`, `tz` and `all` out of decoded query-string pairs.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        Self {
            dt: map.get("dt").cloned(),
            tz: map.get("tz").cloned(),
            all: map.get("all").cloned(),
        }
    }
}

/// Where the query time came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSource {
    /// `dt`/`tz` supplied by a privileged client
    Requested,
    /// Client is not privileged; any supplied time was ignored
    NowUnprivileged,
    /// `dt` or `tz` absent
    NowMissing,
    /// `dt`/`tz` present but unparsable (unknown zone included)
    NowUnparsable(String),
}

/// A resolved search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery {
    /// Epoch seconds
    pub current_time: i64,
    pub all_active: bool,
}

/// A search plus how its time was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub query: SearchQuery,
    pub time_source: TimeSource,
}

impl SearchQuery {
    /// Resolves request parameters; `now` is the current epoch second.
    pub fn resolve(params: &QueryParams, privileged: bool, now: i64) -> ResolvedQuery {
        let (current_time, time_source) = if !privileged {
            (now, TimeSource::NowUnprivileged)
        } else {
            match (params.dt.as_deref(), params.tz.as_deref()) {
                (Some(dt), Some(tz)) => match parse_timestamp(dt, tz) {
                    Ok(ts) => (ts, TimeSource::Requested),
                    Err(e) => {
                        debug!(%dt, %tz, error = %e, "unparsable query time, using now");
                        (now, TimeSource::NowUnparsable(e.to_string()))
                    }
                },
                _ => (now, TimeSource::NowMissing),
            }
        };

        let all_active = privileged && wants_all(params.all.as_deref());

        ResolvedQuery {
            query: SearchQuery {
                current_time,
                all_active,
            },
            time_source,
        }
    }
}

/// `all` counts only when it is the integer 1.
fn wants_all(all: Option<&str>) -> bool {
    matches!(all.map(|s| s.trim().parse::<i64>()), Some(Ok(1)))
}
