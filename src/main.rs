use clientip::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let config = bootstrap::app::setup();

    let jobs = app::start(&config).await;

    // Each job stops on its own when the process receives a termination signal
    futures::future::join_all(jobs).await;

    info!("clientip successfully shutdown.");
}
