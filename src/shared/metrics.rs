//! Metrics utilities module
//!
//! Prometheus counters for relayed calls, exposed on `/metrics`.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

use crate::shared::error::AppResult;

/// Relay request metrics backed by a private registry
pub struct RelayMetrics {
    registry: Registry,
    requests: IntCounterVec,
    node_call_duration: HistogramVec,
}

impl RelayMetrics {
    /// Create and register the relay metric families
    pub fn new() -> AppResult<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("relay_requests_total", "Relayed requests by route and outcome"),
            &["route", "outcome"],
        )?;
        let node_call_duration = HistogramVec::new(
            HistogramOpts::new(
                "relay_node_call_duration_seconds",
                "Time spent waiting on the node per route",
            ),
            &["route"],
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(node_call_duration.clone()))?;

        Ok(Self {
            registry,
            requests,
            node_call_duration,
        })
    }

    /// Record one relayed request; `outcome` is `ok` or an error kind
    pub fn record(&self, route: &str, outcome: &str, elapsed_secs: f64) {
        self.requests.with_label_values(&[route, outcome]).inc();
        self.node_call_duration
            .with_label_values(&[route])
            .observe(elapsed_secs);
    }

    /// Count a request rejected before reaching the node
    pub fn record_rejected(&self, route: &str, outcome: &str) {
        self.requests.with_label_values(&[route, outcome]).inc();
    }

    pub fn request_count(&self, route: &str, outcome: &str) -> u64 {
        self.requests.with_label_values(&[route, outcome]).get()
    }

    /// Render all metrics in the Prometheus text format
    pub fn render(&self) -> AppResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| crate::shared::error::AppError::Internal(format!("metrics output is not UTF-8: {}", e)))
    }
}
