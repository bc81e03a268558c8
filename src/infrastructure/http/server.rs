//! HTTP server implementation
//!
//! Wires configuration, the node adapter and the relay service into the
//! warp route tree and serves it.

use std::convert::Infallible;
use std::sync::Arc;
use tracing::{info, instrument};
use warp::{Filter, Reply};

use crate::{
    application::services::RelayService,
    config::AppConfig,
    domain::passthrough::PassthroughPolicy,
    infrastructure::{
        adapters::{NodeRpc, NodeRpcAdapter},
        http::routes::RouteBuilder,
    },
    shared::{
        error::{AppError, AppResult},
        metrics::RelayMetrics,
    },
};

/// Relay HTTP server
pub struct HttpServer {
    config: AppConfig,
    relay_service: Arc<RelayService>,
    metrics: Arc<RelayMetrics>,
}

impl HttpServer {
    /// Create a server that talks to the configured node
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let node = Arc::new(NodeRpcAdapter::new(&config.node)?);
        Self::with_node(config, node)
    }

    /// Create a server around any [`NodeRpc`] implementation
    pub fn with_node(config: AppConfig, node: Arc<dyn NodeRpc>) -> AppResult<Self> {
        let metrics = Arc::new(RelayMetrics::new()?);
        let policy = PassthroughPolicy::from_config(&config.passthrough);
        if policy.is_restricted() {
            info!(
                enabled = config.passthrough.enabled,
                allowed = ?config.passthrough.allowed_methods,
                "Passthrough route is restricted"
            );
        }

        let relay_service = Arc::new(RelayService::new(
            node,
            policy,
            metrics.clone(),
            config.security.enable_request_logging,
        ));

        Ok(Self {
            config,
            relay_service,
            metrics,
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server until the process exits
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr: std::net::SocketAddr = self
            .config
            .server_address()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        info!(
            listen = %addr,
            node = %self.config.node.rpc_url(),
            "Relay listening, proxying to node"
        );

        warp::serve(self.create_routes()).run(addr).await;

        Ok(())
    }

    /// Create the application routes
    pub fn create_routes(&self) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
        RouteBuilder::build_routes(&self.config, self.relay_service.clone(), self.metrics.clone())
    }
}
