//! Axum [`extractors`](axum::extract) for the HTTP server.
pub mod client_ip;
