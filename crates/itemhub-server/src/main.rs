//! Binary entrypoint for the itemhub HTTP server.
//!
//! Configuration comes from `ITEMHUB_*` environment variables (see
//! [`itemhub_server::config`]); log filtering from `RUST_LOG`.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use itemhub_server::config::ServerConfig;
use itemhub_server::server::ItemHubServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let addr = config.bind_addr();

    ItemHubServer::new(config)
        .serve()
        .await
        .with_context(|| format!("server on {} failed", addr))
}
