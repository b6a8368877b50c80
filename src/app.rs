//! `clientip` application.
//!
//! The application has a global configuration for all its jobs. Currently the
//! only job is the HTTP API, which reports the client IP of each request.
use clientip_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::http_api;

/// Starts the application jobs.
///
/// # Panics
///
/// Will panic if a job cannot be started.
pub async fn start(config: &Configuration) -> Vec<JoinHandle<()>> {
    vec![http_api::start_job(&config.http_api).await]
}
