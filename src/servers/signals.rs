//! This module contains functions to handle signals.
use std::time::Duration;

use derive_more::Display;
use tokio::sync::oneshot::Receiver;
use tracing::{info, warn};

/// Time the open connections have to finish after a shutdown was requested.
pub const GRACEFUL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// This is the message that the "launcher" spawned task receives from the main
/// application process to notify the service to shutdown.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Halted {
    Normal,
}

/// Resolves on `ctrl_c` or the `terminate` signal.
///
/// # Panics
///
/// Will panic if the `ctrl_c` or `terminate` signal resolves with an error.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Resolves when the `rx_halt` or the `global_shutdown_signal()` resolves.
///
/// A dropped halt sender counts as a halt request.
pub async fn shutdown_signal(rx_halt: Receiver<Halted>) {
    let halt = async {
        match rx_halt.await {
            Ok(signal) => info!("Halt signal processed: {}", signal),
            Err(err) => warn!("Halt channel closed without a signal: {err}"),
        }
    };

    tokio::select! {
        () = halt => {},
        () = global_shutdown_signal() => { info!("Global shutdown signal processed") }
    }
}

/// Waits for a shutdown signal and asks the server behind `handle` to stop
/// accepting connections.
pub async fn graceful_shutdown(handle: axum_server::Handle, rx_halt: Receiver<Halted>, message: String) {
    shutdown_signal(rx_halt).await;

    info!("{message}");

    handle.graceful_shutdown(Some(GRACEFUL_SHUTDOWN_TIMEOUT));
}
