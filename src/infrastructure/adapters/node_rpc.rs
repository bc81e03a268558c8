//! Node RPC adapter
//!
//! Performs authenticated JSON-RPC calls against the node daemon and folds
//! every failure mode into [`AppError`].

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    config::NodeConfig,
    domain::rpc::{RpcEnvelope, RpcReply, RpcRequest},
    shared::error::{AppError, AppResult},
};

/// Anything that can answer a JSON-RPC call on behalf of the node
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Perform one call and return the raw `result` value
    async fn call(&self, request: &RpcRequest) -> AppResult<Value>;
}

/// HTTP client for the node's JSON-RPC endpoint
pub struct NodeRpcAdapter {
    client: Client,
    url: String,
    rpc_user: String,
    rpc_password: String,
    client_id: String,
    timeout: Duration,
}

impl NodeRpcAdapter {
    /// Create a new adapter from node settings
    pub fn new(config: &NodeConfig) -> AppResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.rpc_url(),
            rpc_user: config.rpc_user.clone(),
            rpc_password: config.rpc_password.clone(),
            client_id: config.client_id.clone(),
            timeout: config.timeout(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// One POST plus body read; the caller bounds it with the deadline
    async fn exchange(&self, request: &RpcRequest) -> AppResult<Value> {
        let body = serde_json::to_vec(&RpcEnvelope::new(&self.client_id, request))
            .map_err(|e| AppError::Internal(format!("Failed to encode RPC envelope: {}", e)))?;

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.rpc_user, Some(&self.rpc_password))
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        // HTTP-level rejection outranks whatever the body says
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let parsed: Value = serde_json::from_slice(&bytes).map_err(|_| AppError::InvalidResponse)?;

        RpcReply::interpret(parsed)
    }
}

#[async_trait]
impl NodeRpc for NodeRpcAdapter {
    async fn call(&self, request: &RpcRequest) -> AppResult<Value> {
        request.validate()?;

        debug!(
            method = %request.method,
            params = request.params.len(),
            endpoint = %self.url,
            "Sending request to node"
        );

        // Dropping the exchange on expiry aborts the connection and the timer
        match tokio::time::timeout(self.timeout, self.exchange(request)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    method = %request.method,
                    timeout_seconds = self.timeout.as_secs(),
                    "Node did not answer before the deadline"
                );
                Err(AppError::Timeout(self.timeout.as_secs()))
            }
        }
    }
}
