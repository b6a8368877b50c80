use std::net::SocketAddr;

use clientip::bootstrap::jobs::Started;
use clientip::servers::http::server;
use clientip::servers::signals::Halted;
use clientip_configuration::Configuration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running HTTP API server.
pub struct Environment {
    pub bind_address: SocketAddr,
    tx_halt: oneshot::Sender<Halted>,
    server: JoinHandle<Result<(), server::Error>>,
}

impl Environment {
    /// Starts the HTTP API server with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the server does not start.
    pub async fn start(configuration: &Configuration) -> Self {
        let (tx_start, rx_start) = oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

        let server = tokio::spawn(server::start(configuration.http_api.bind_address, tx_start, rx_halt));

        let started = rx_start.await.expect("it should start the HTTP API server");

        Self {
            bind_address: started.address,
            tx_halt,
            server,
        }
    }

    /// Stops the server and waits until it has finished.
    ///
    /// # Panics
    ///
    /// Panics if the server does not stop cleanly.
    pub async fn stop(self) {
        self.tx_halt.send(Halted::Normal).expect("it should send the halt signal");

        self.server
            .await
            .expect("it should join the HTTP API server task")
            .expect("it should stop the HTTP API server without errors");
    }
}
