//! Splits a `host:port` string into its host part.
//!
//! It follows the usual textual conventions for socket addresses:
//!
//! ```text
//! 192.0.2.10:54321      -> 192.0.2.10
//! [2001:db8::1]:443     -> 2001:db8::1
//! example.com:80        -> example.com
//! 2001:db8::1           -> (no split, too many colons)
//! 192.0.2.10            -> (no split, missing port)
//! ```
//!
//! Only the syntax is checked. The host is not validated as an IP address and
//! the port may be empty or not numeric.

/// Returns the host portion of `addr` when it has the `host:port` form and the
/// host is not empty.
#[must_use]
pub fn split(addr: &str) -> Option<&str> {
    let last_colon = addr.rfind(':')?;

    let (host, host_start, host_end) = if addr.starts_with('[') {
        let closing_bracket = addr.find(']')?;

        // `[host]:port`, the port separator must follow the bracket.
        if closing_bracket + 1 != last_colon {
            return None;
        }

        (&addr[1..closing_bracket], 1, closing_bracket + 1)
    } else {
        let host = &addr[..last_colon];

        if host.contains(':') {
            return None;
        }

        (host, 0, 0)
    };

    if addr[host_start..].contains('[') || addr[host_end..].contains(']') {
        return None;
    }

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
