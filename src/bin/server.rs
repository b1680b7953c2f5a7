//! clipscout service binary.

use clipscout::{Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("clipscout starting");

    let mut server = Server::start(config).await.map_err(|e| {
        tracing::error!(error = %e, "clipscout failed to start");
        anyhow::anyhow!("startup failed: {e}")
    })?;

    server.join().await;
    Ok(())
}
