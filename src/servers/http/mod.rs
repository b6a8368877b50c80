//! HTTP API.
//!
//! A small HTTP server that reports the client IP address of each request as
//! seen through the proxies in front of it. It responds to two `GET`
//! requests:
//!
//! - `/client_ip`: the resolved client IP and the header (or the connection
//!   info) it was taken from.
//! - `/health_check`: always `{"status":"Ok"}` while the server is running.
//!
//! ## Client IP
//!
//! ```text
//! curl -H "X-Forwarded-For: unknown, 203.0.113.5, 10.0.0.1" http://127.0.0.1:7070/client_ip
//! ```
//!
//! ```json
//! {
//!   "client_ip": "203.0.113.5",
//!   "source": "x-forwarded-for"
//! }
//! ```
//!
//! When no header nor the connection info contains a valid IP address both
//! fields are `null`. The response status is `200 OK` in both cases.
//!
//! Refer to the [`resolver`](crate::resolver) module for the order in which the
//! headers are checked.
//!
//! ## Versioning
//!
//! The endpoints live in the [`v1`] module. There is no version prefix in the
//! URL.
pub mod server;
pub mod v1;

/// The log target used by the HTTP API.
pub const HTTP_API_LOG_TARGET: &str = "HTTP API";
