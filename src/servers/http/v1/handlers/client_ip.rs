//! Handler for the `/client_ip` endpoint.
use std::net::IpAddr;

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resolver::Resolution;
use crate::servers::http::v1::extractors::client_ip::ClientIp;
use crate::servers::http::HTTP_API_LOG_TARGET;

/// It responds with the client IP of the request and where it was found.
#[allow(clippy::unused_async)]
pub async fn handler(ClientIp(resolution): ClientIp) -> Json<Report> {
    match resolution {
        Some(resolution) => {
            debug!(target: HTTP_API_LOG_TARGET, client_ip = %resolution.ip, source = %resolution.source, "client IP resolved");
        }
        None => {
            debug!(target: HTTP_API_LOG_TARGET, "client IP could not be resolved");
        }
    }

    Json(Report::from(resolution))
}

/// The `/client_ip` response body.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Report {
    /// The resolved client IP.
    pub client_ip: Option<IpAddr>,
    /// The header the IP was taken from, or `connection-info` for the peer
    /// address.
    pub source: Option<String>,
}

impl From<Option<Resolution>> for Report {
    fn from(resolution: Option<Resolution>) -> Self {
        match resolution {
            Some(resolution) => Report {
                client_ip: Some(resolution.ip),
                source: Some(resolution.source.to_string()),
            },
            None => Report {
                client_ip: None,
                source: None,
            },
        }
    }
}
