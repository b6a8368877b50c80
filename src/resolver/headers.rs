//! Read-only access to the request headers the resolver looks at.
//!
//! Header names are matched ignoring ASCII case. A missing header, or a header
//! whose value is not valid text, reads as the empty string.
use std::collections::HashMap;
use std::hash::BuildHasher;

use axum::http::HeaderMap;

/// The standard forwarding chain header.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Single-address headers set by CDNs and proxies, in the order they are
/// checked when the forwarding chain does not contain a valid address.
pub const ALTERNATIVE_HEADERS: [&str; 8] = [
    "x-client-ip",
    "cf-connecting-ip",
    "fastly-client-ip",
    "true-client-ip",
    "x-real-ip",
    "x-cluster-client-ip",
    "x-forwarded",
    "forwarded-for",
];

/// A case-insensitive header lookup.
pub trait HeaderSource {
    /// Returns the value of the header `name`, or `""` if it is not present.
    fn header(&self, name: &str) -> &str;
}

/// Only the first field is returned when the header is repeated.
impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> &str {
        self.get(name).and_then(|value| value.to_str().ok()).unwrap_or_default()
    }
}

/// If two keys differ only in case, which one is returned is unspecified.
impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn header(&self, name: &str) -> &str {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map_or("", |(_, value)| value.as_str())
    }
}

impl HeaderSource for [(&str, &str)] {
    fn header(&self, name: &str) -> &str {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map_or("", |(_, value)| *value)
    }
}
