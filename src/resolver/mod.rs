//! Client IP resolver.
//!
//! Given this request chain:
//!
//! ```text
//! client          <-> http proxy 1                 <-> http proxy 2                          <-> server
//! ip: 126.0.0.1       ip: 126.0.0.2                    ip: 126.0.0.3                             ip: 126.0.0.4
//!                     X-Forwarded-For: 126.0.0.1       X-Forwarded-For: 126.0.0.1,126.0.0.2
//! ```
//!
//! the server sees the connection coming from `126.0.0.3` and the resolver
//! returns `126.0.0.1`, the left-most address in the `X-Forwarded-For` header.
//!
//! The sources are tried in this order and the first valid IP address wins:
//!
//! 1. The left-most IP address in the [`X-Forwarded-For`](headers::X_FORWARDED_FOR)
//!    header. Entries that are not addresses (like `unknown`) are skipped and
//!    ports are removed.
//! 2. The first of the [alternative headers](headers::ALTERNATIVE_HEADERS)
//!    containing exactly one IP address (no port allowed).
//! 3. The peer address of the connection, with or without a port.
//!
//! Resolution never fails with an error. When no source contains a valid IP
//! address the result is `None`, whether the headers were missing or
//! malformed.
//!
//! > **NOTICE**: the headers are trusted as they are. They can be forged by the
//! > client unless a trusted proxy overwrites them.
//!
//! ```rust
//! use std::net::IpAddr;
//!
//! let headers: &[(&str, &str)] = &[("X-Forwarded-For", "unknown, 203.0.113.5, 10.0.0.1")];
//!
//! let ip = clientip::resolver::resolve(headers, "10.0.0.2:54321");
//!
//! assert_eq!(ip, Some("203.0.113.5".parse::<IpAddr>().unwrap()));
//! ```
pub mod forwarded_chain;
pub mod headers;
pub mod host_port;

use std::net::IpAddr;

pub use headers::{HeaderSource, ALTERNATIVE_HEADERS, X_FORWARDED_FOR};

/// Name used for the peer address when reporting where an IP came from.
pub const CONNECTION_INFO: &str = "connection-info";

/// Where the resolved IP address was found.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Source {
    /// The `X-Forwarded-For` chain.
    ForwardedChain,
    /// One of the [`ALTERNATIVE_HEADERS`].
    AlternativeHeader(&'static str),
    /// The peer address of the connection.
    PeerAddress,
}

impl Source {
    /// The header name, or [`CONNECTION_INFO`] for the peer address.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Source::ForwardedChain => X_FORWARDED_FOR,
            Source::AlternativeHeader(header) => *header,
            Source::PeerAddress => CONNECTION_INFO,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved client IP and its source.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Resolution {
    pub ip: IpAddr,
    pub source: Source,
}

/// Returns the client IP address from the request headers and the peer
/// address of the connection, or `None` if none of them contains a valid IP
/// address.
#[must_use]
pub fn resolve<H: HeaderSource + ?Sized>(headers: &H, peer_addr: &str) -> Option<IpAddr> {
    resolve_with_source(headers, peer_addr).map(|resolution| resolution.ip)
}

/// Same as [`resolve`] but it also returns where the IP address was found.
#[must_use]
pub fn resolve_with_source<H: HeaderSource + ?Sized>(headers: &H, peer_addr: &str) -> Option<Resolution> {
    if let Some(ip) = forwarded_chain::parse(headers.header(X_FORWARDED_FOR)) {
        return Some(Resolution {
            ip,
            source: Source::ForwardedChain,
        });
    }

    for header in ALTERNATIVE_HEADERS {
        if let Ok(ip) = headers.header(header).parse::<IpAddr>() {
            return Some(Resolution {
                ip,
                source: Source::AlternativeHeader(header),
            });
        }
    }

    // If there is a port, only the host part is considered.
    let host = host_port::split(peer_addr).unwrap_or(peer_addr);

    host.parse::<IpAddr>().ok().map(|ip| Resolution {
        ip,
        source: Source::PeerAddress,
    })
}
