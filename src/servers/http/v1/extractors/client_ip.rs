//! Axum [`extractor`](axum::extract) that resolves the client IP of the
//! request.
//!
//! It combines the request headers with the `ConnectInfo` extractor from the
//! `axum` crate, which provides the peer address of the connection, and passes
//! both to the [`resolver`](crate::resolver).
//!
//! Given the following scenario:
//!
//! ```text
//! client          <-> http proxy 1                 <-> http proxy 2                          <-> server
//! ip: 126.0.0.1       ip: 126.0.0.2                    ip: 126.0.0.3                             ip: 126.0.0.4
//!                     X-Forwarded-For: 126.0.0.1       X-Forwarded-For: 126.0.0.1,126.0.0.2
//! ```
//!
//! This extractor returns `126.0.0.1` taken from the `X-Forwarded-For` header.
//! Without proxies it returns the connection info IP.
//!
//! The extraction never rejects a request. If the server was started without
//! connection info the peer address is empty and only the headers are used.
use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::resolver::{self, Resolution};

/// Extractor for the resolved client IP, `None` if it could not be resolved.
pub struct ClientIp(pub Option<Resolution>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let peer_addr = match ConnectInfo::<SocketAddr>::from_request_parts(parts, state).await {
            Ok(ConnectInfo(connection_info_socket_addr)) => connection_info_socket_addr.to_string(),
            Err(_) => String::new(),
        };

        Ok(ClientIp(resolver::resolve_with_source(&parts.headers, &peer_addr)))
    }
}
