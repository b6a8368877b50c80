//! Configurations for tests.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clientip_configuration::{Configuration, Threshold};

/// This configuration is used for testing. The HTTP API binds to a port chosen
/// by the operating system so tests can run in parallel.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

    config
}
