use rental_backend::{RentalConfig, RentalServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> rental_backend::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let _server = RentalServer::new(RentalConfig::new()).await?;

    // The server runs on a spawned task; keep the process alive until it is
    // interrupted.
    tokio::signal::ctrl_c().await?;

    Ok(())
}
