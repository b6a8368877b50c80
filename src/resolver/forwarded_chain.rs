//! Parser for the `X-Forwarded-For` header.
//!
//! Every proxy appends the address it received the request from, so the
//! header looks like:
//!
//! ```text
//! X-Forwarded-For: <client>, <proxy 1>, <proxy 2>
//! ```
//!
//! The left-most entry is the originating client. Some proxies write
//! `unknown` instead of an address (Squid's `forwarded_for` directive, for
//! example) and others append a port (Azure App Service), so the parser takes
//! the left-most entry that is an IP address once the port is removed.
use std::net::IpAddr;

use super::host_port;

/// Returns the left-most valid IP address in a comma-separated forwarding
/// chain, or `None` if no entry is an IP address.
#[must_use]
pub fn parse(chain: &str) -> Option<IpAddr> {
    chain.split(',').map(str::trim).find_map(|entry| {
        let host = host_port::split(entry).unwrap_or(entry);

        host.parse::<IpAddr>().ok()
    })
}
