//! Setup for the main application.
//!
//! The [`setup`] function loads the configuration and initializes logging
//! before any job is started.
use clientip_configuration::Configuration;
use tracing::{info, warn};

use crate::bootstrap;

/// It loads the configuration and initializes the application logging.
///
/// # Panics
///
/// Will panic if the configuration is not valid.
#[must_use]
pub fn setup() -> Configuration {
    let configuration = bootstrap::config::initialize_configuration();

    initialize_logging(&configuration);

    match configuration.to_toml() {
        Ok(toml) => info!("Configuration:\n{toml}"),
        Err(err) => warn!("Configuration could not be printed: {err}"),
    }

    configuration
}

pub fn initialize_logging(config: &Configuration) {
    bootstrap::logging::setup(config);
}
