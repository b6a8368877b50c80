//! HTTP server routes for version `v1`.
use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::propagate_header::PropagateHeaderLayer;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, Span};

use super::handlers::{client_ip, health_check};
use crate::servers::http::HTTP_API_LOG_TARGET;

const X_REQUEST_ID: &str = "x-request-id";

/// It adds the routes to the router.
///
/// > **NOTICE**: the server must be started with the connection info
/// > (`into_make_service_with_connect_info::<SocketAddr>`). Otherwise the
/// > client IP can only be taken from the headers.
pub fn router(server_socket_addr: SocketAddr) -> Router {
    Router::new()
        // Health check
        .route("/health_check", get(health_check::handler))
        // Client IP
        .route("/client_ip", get(client_ip::handler))
        .layer(PropagateHeaderLayer::new(HeaderName::from_static(X_REQUEST_ID)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(move |request: &Request<Body>, _span: &Span| {
                    let method = request.method().to_string();
                    let uri = request.uri().to_string();
                    let request_id = request_id(request.headers());

                    tracing::info!(
                        target: HTTP_API_LOG_TARGET,
                        server_socket_addr = %server_socket_addr, method = %method, uri = %uri, request_id = %request_id, "request");
                })
                .on_response(move |response: &Response, latency: Duration, _span: &Span| {
                    let status_code = response.status();
                    let request_id = request_id(response.headers());
                    let latency_ms = latency.as_millis();

                    tracing::info!(
                        target: HTTP_API_LOG_TARGET,
                        server_socket_addr = %server_socket_addr, latency = %latency_ms, status = %status_code, request_id = %request_id, "response");
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn request_id(headers: &axum::http::HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
