use std::sync::Arc;

use hue_store::{default_seed, load_seed, ColorStore, InMemoryColorStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::endpoint::endpoints;
use crate::error::ServerResult;
use crate::handler::AppState;
use crate::router::build_router;

/// Hue GraphQL server.
pub struct HueServer {
    config: ServerConfig,
    store: Arc<dyn ColorStore>,
}

impl HueServer {
    /// Create a server whose store is seeded from `config.seed_path`, or
    /// from the embedded seed when no path is set.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let seed = match &config.seed_path {
            Some(path) => load_seed(path)?,
            None => default_seed()?,
        };
        let store = Arc::new(InMemoryColorStore::from_seed(seed)?);
        Ok(Self::with_store(config, store))
    }

    /// Create a server over an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn ColorStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn ColorStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(Arc::clone(&self.store)), self.config.playground)
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        let addr = listener.local_addr()?;
        tracing::info!(
            colors = self.store.count()?,
            "Server running on http://{addr}{}",
            endpoints::GRAPHQL
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
