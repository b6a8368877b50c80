//! HTTP server implementation for the `v1` API.
//!
//! Refer to the generic [HTTP server documentation](crate::servers::http) for
//! more information about the endpoints and their usage.
pub mod extractors;
pub mod handlers;
pub mod routes;
