//! Relay service that maps each route to exactly one node call

use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

use crate::{
    domain::{
        passthrough::PassthroughPolicy,
        rpc::{methods, RpcRequest},
    },
    infrastructure::adapters::NodeRpc,
    shared::{
        error::{AppError, AppResult},
        logging::LoggingUtils,
        metrics::RelayMetrics,
        validation::ValidationUtils,
    },
};

/// Route labels used in logs and metrics
pub mod routes {
    pub const TOTAL_BALANCES: &str = "total_balances";
    pub const TOP_BALANCES: &str = "top_balances";
    pub const LATEST_UTXO: &str = "latest_utxo";
    pub const ADDRESS_BALANCES: &str = "address_balances";
    pub const PASSTHROUGH: &str = "rpc";
}

/// Orchestrates node calls for the HTTP routes
pub struct RelayService {
    node: Arc<dyn NodeRpc>,
    passthrough: PassthroughPolicy,
    metrics: Arc<RelayMetrics>,
    log_requests: bool,
}

impl RelayService {
    /// Create a new relay service
    pub fn new(
        node: Arc<dyn NodeRpc>,
        passthrough: PassthroughPolicy,
        metrics: Arc<RelayMetrics>,
        log_requests: bool,
    ) -> Self {
        Self {
            node,
            passthrough,
            metrics,
            log_requests,
        }
    }

    pub async fn total_balances(&self) -> AppResult<Value> {
        self.relay(routes::TOTAL_BALANCES, RpcRequest::without_params(methods::TOTAL_BALANCES))
            .await
    }

    pub async fn top_balances(&self) -> AppResult<Value> {
        self.relay(routes::TOP_BALANCES, RpcRequest::without_params(methods::TOP_BALANCES))
            .await
    }

    pub async fn latest_utxo(&self) -> AppResult<Value> {
        self.relay(routes::LATEST_UTXO, RpcRequest::without_params(methods::LATEST_UTXO))
            .await
    }

    pub async fn address_balances(&self, min_conf: u32) -> AppResult<Value> {
        self.relay(
            routes::ADDRESS_BALANCES,
            RpcRequest::new(methods::ADDRESS_BALANCES, vec![json!(min_conf)]),
        )
        .await
    }

    /// Forward a caller-named method after the name and policy checks
    pub async fn passthrough(&self, request: RpcRequest) -> AppResult<Value> {
        let checked = ValidationUtils::validate_method_name(&request.method)
            .and_then(|_| self.passthrough.check(&request.method));

        if let Err(e) = checked {
            return Err(self.reject_passthrough(e));
        }

        self.relay(routes::PASSTHROUGH, request).await
    }

    /// Count a passthrough request refused before the node was contacted
    pub fn reject_passthrough(&self, error: AppError) -> AppError {
        self.metrics.record_rejected(routes::PASSTHROUGH, error.kind());
        error
    }

    async fn relay(&self, route: &'static str, request: RpcRequest) -> AppResult<Value> {
        let request_id = LoggingUtils::generate_request_id();
        let started = Instant::now();

        let outcome = self.node.call(&request).await;

        let elapsed = started.elapsed();
        let duration_ms = elapsed.as_millis() as u64;
        match &outcome {
            Ok(_) => {
                self.metrics.record(route, "ok", elapsed.as_secs_f64());
                if self.log_requests {
                    LoggingUtils::log_success(&request_id, route, &request.method, duration_ms);
                }
            }
            Err(e) => {
                self.metrics.record(route, e.kind(), elapsed.as_secs_f64());
                LoggingUtils::log_error(&request_id, route, &request.method, e, duration_ms);
            }
        }

        outcome
    }
}
