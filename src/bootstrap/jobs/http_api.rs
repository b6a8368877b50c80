//! HTTP API job starter.
//!
//! The [`http_api::start_job`](crate::bootstrap::jobs::http_api::start_job)
//! function spawns a new asynchronous task, that task is the "**launcher**".
//! The "**launcher**" starts the actual server and sends a message back
//! to the main application.
//!
//! The "**launcher**" is an intermediary thread that decouples the HTTP API
//! server from the process that handles it.
//!
//! Refer to the [configuration documentation](https://docs.rs/clientip-configuration)
//! for the API configuration options.
use clientip_configuration::HttpApi;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::Started;
use crate::servers::http::{server, HTTP_API_LOG_TARGET};
use crate::servers::logging::STARTED_ON;
use crate::servers::signals::Halted;

/// This function starts a new HTTP API server with the provided configuration.
///
/// The functions starts a new concurrent task that will run the API server.
/// This task will send a message to the main application process to notify
/// that the API server was successfully started.
///
/// # Panics
///
/// It would panic if the server could not be started.
pub async fn start_job(config: &HttpApi) -> JoinHandle<()> {
    let bind_addr = config.bind_address;

    let (tx_start, rx_start) = oneshot::channel::<Started>();
    let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

    let protocol = "http";

    // Run the API server
    let join_handle = tokio::spawn(async move {
        tracing::info!(target: HTTP_API_LOG_TARGET, "Starting on: {protocol}://{}", bind_addr);

        match server::start(bind_addr, tx_start, rx_halt).await {
            Ok(()) => tracing::info!(target: HTTP_API_LOG_TARGET, "Stopped server running on: {protocol}://{}", bind_addr),
            Err(err) => tracing::error!(target: HTTP_API_LOG_TARGET, "{err}"),
        }
    });

    // Wait until the server sends the started message
    match rx_start.await {
        Ok(msg) => tracing::info!(target: HTTP_API_LOG_TARGET, "{STARTED_ON}: {protocol}://{}", msg.address),
        Err(e) => panic!("the HTTP API server on {protocol}://{bind_addr} could not be started: {e}"),
    }

    // Wait until the server finishes
    tokio::spawn(async move {
        assert!(!tx_halt.is_closed(), "Halt channel for HTTP API should be open");

        join_handle
            .await
            .expect("it should be able to join to the HTTP API server task");
    })
}
