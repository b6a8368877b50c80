//! **clientip** resolves the real client IP address of an HTTP request that
//! went through reverse proxies, load balancers or CDNs.
//!
//! Proxies hide the address of the client behind their own address and pass
//! the original one along in request headers. This crate picks one address to
//! treat as the client following a fixed priority order, and never fails: if
//! no valid IP address can be found the result is simply `None`.
//!
//! # Table of contents
//!
//! - [Resolver](#resolver)
//! - [HTTP API](#http-api)
//! - [Configuration](#configuration)
//! - [Usage](#usage)
//!
//! # Resolver
//!
//! The [`resolver`] module is a pure function of the request headers and the
//! peer address of the connection. It checks, in this order:
//!
//! 1. `x-forwarded-for`: the left-most valid IP address in the chain.
//! 2. `x-client-ip`, `cf-connecting-ip`, `fastly-client-ip`, `true-client-ip`,
//!    `x-real-ip`, `x-cluster-client-ip`, `x-forwarded` and `forwarded-for`.
//! 3. The peer address, with or without a port.
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::net::IpAddr;
//!
//! let headers = HashMap::from([("CF-Connecting-IP".to_string(), "198.51.100.1".to_string())]);
//!
//! assert_eq!(
//!     clientip::resolver::resolve(&headers, "10.0.0.1:54321"),
//!     Some("198.51.100.1".parse::<IpAddr>().unwrap())
//! );
//! ```
//!
//! The headers can be given as an `axum::http::HeaderMap`, a
//! `HashMap<String, String>` or a slice of `(name, value)` pairs. Any other
//! type can implement [`HeaderSource`](resolver::HeaderSource).
//!
//! # HTTP API
//!
//! The application runs a small [HTTP server](servers::http) with a
//! `/client_ip` endpoint that responds with the resolved client IP of each
//! request. The [`ClientIp`](servers::http::v1::extractors::client_ip::ClientIp)
//! extractor can be reused in other `axum` applications.
//!
//! # Configuration
//!
//! The application is configured with a TOML file. Refer to the
//! [configuration crate](https://docs.rs/clientip-configuration) for all the
//! options and the environment variables that override them.
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "default"
//!
//! [http_api]
//! bind_address = "127.0.0.1:7070"
//! ```
//!
//! # Usage
//!
//! ```text
//! cargo run
//! curl -H "X-Real-IP: 198.51.100.1" http://127.0.0.1:7070/client_ip
//! ```
pub mod app;
pub mod bootstrap;
pub mod resolver;
pub mod servers;
