//! Testing helpers for the `clientip` HTTP API.
pub mod configuration;
