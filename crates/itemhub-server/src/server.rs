//! Server lifecycle: bind, serve, shut down on Ctrl-C.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

/// The itemhub HTTP server.
pub struct ItemHubServer {
    config: ServerConfig,
    state: AppState,
}

impl ItemHubServer {
    /// Creates a server with an empty store built from `config`.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::new(config.id_policy);
        ItemHubServer { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Builds the router over this server's state (useful for testing).
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn serve(self) -> std::io::Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            id_policy = %self.config.id_policy,
            "itemhub server listening on {}",
            listener.local_addr()?
        );

        axum::serve(listener, build_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemhub_store::IdPolicy;

    #[test]
    fn server_uses_configured_policy() {
        let config = ServerConfig {
            id_policy: IdPolicy::Monotonic,
            ..ServerConfig::default()
        };
        let server = ItemHubServer::new(config);
        assert_eq!(server.config().id_policy, IdPolicy::Monotonic);
        assert_eq!(server.state.store.try_lock().unwrap().policy(), IdPolicy::Monotonic);
        let _router = server.router();
    }
}
