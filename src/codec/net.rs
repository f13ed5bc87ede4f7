//! IPv4 literal parsing

use std::net::Ipv4Addr;

use super::errors::{CodecError, CodecResult};

/// Parses a strict dotted-quad IPv4 literal (e.g. `10.0.0.1`).
pub fn parse_ipv4_literal(text: &str) -> CodecResult<Ipv4Addr> {
    text.parse::<Ipv4Addr>()
        .map_err(|_| CodecError::InvalidIpv4(text.to_string()))
}
