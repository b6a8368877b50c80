//! Logic to run the HTTP API server.
use std::net::SocketAddr;

use thiserror::Error;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::warn;

use super::v1::routes::router;
use super::HTTP_API_LOG_TARGET;
use crate::bootstrap::jobs::Started;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors that stop the HTTP API server.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not bind the HTTP API listener to {address}: {source}")]
    Bind { address: SocketAddr, source: std::io::Error },

    #[error("could not get the local address of the HTTP API listener: {source}")]
    LocalAddress { source: std::io::Error },

    #[error("the HTTP API server on {address} stopped with an error: {source}")]
    Serve { address: SocketAddr, source: std::io::Error },
}

/// Starts the HTTP API server.
///
/// It sends a [`Started`] message with the bound address once the server is
/// about to accept connections, and stops gracefully when `rx_halt` receives a
/// [`Halted`] message or the process receives a termination signal.
///
/// # Errors
///
/// Will return an error if the socket cannot be bound or the server fails.
pub async fn start(address: SocketAddr, tx_start: Sender<Started>, rx_halt: Receiver<Halted>) -> Result<(), Error> {
    let socket = std::net::TcpListener::bind(address).map_err(|source| Error::Bind { address, source })?;

    socket
        .set_nonblocking(true)
        .map_err(|source| Error::Bind { address, source })?;

    let address = socket.local_addr().map_err(|source| Error::LocalAddress { source })?;

    let app = router(address);

    let handle = axum_server::Handle::new();

    tokio::task::spawn(graceful_shutdown(
        handle.clone(),
        rx_halt,
        format!("Shutting down HTTP API server on http://{address}"),
    ));

    let running = axum_server::from_tcp(socket)
        .handle(handle)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>());

    if tx_start.send(Started { address }).is_err() {
        warn!(target: HTTP_API_LOG_TARGET, "Nobody is waiting for the HTTP API start notice");
    }

    running.await.map_err(|source| Error::Serve { address, source })
}
